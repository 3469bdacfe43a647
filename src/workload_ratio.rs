// ABOUTME: Acute:chronic workload ratio over rolling 7-day and 28-day session windows
// ABOUTME: Four-band injury-risk classification with coach-voice messaging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

//! # Training Load Ratio (ACWR)
//!
//! Compares the trailing 7-day training load against the trailing 28-day
//! weekly average to flag injury risk from load spikes. A ratio near 1.0
//! means the athlete is training at their established baseline; spikes
//! above 1.5 correlate with elevated injury incidence.
//!
//! # Scientific References
//!
//! - Gabbett, T.J. (2016). The training-injury prevention paradox: should
//!   athletes be training smarter and harder? *British Journal of Sports
//!   Medicine*, 50(5), 273-280. <https://bjsm.bmj.com/content/50/5/273>
//! - Hulin, B.T., et al. (2016). The acute:chronic workload ratio predicts
//!   injury. *British Journal of Sports Medicine*, 50(4), 231-236.

use crate::config::WorkloadRatioConfig;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Load contribution of each session minute, on top of lifted volume
///
/// Matches the session-load formula used across the platform:
/// `sum(weight x reps) + duration_minutes x 100`.
const DURATION_LOAD_FACTOR: f64 = 100.0;

/// Chronic window length divided by acute window length; the chronic sum is
/// divided by this to normalize it to a weekly average
const CHRONIC_WEEKS: f64 = 4.0;

/// Neutral ratio reported when there is no chronic history to compare against
const NO_HISTORY_DEFAULT_RATIO: f64 = 1.0;

/// A single session's contribution to training load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadSample {
    /// When the session was completed
    pub completed_at: DateTime<Utc>,
    /// Pre-aggregated scalar load for the session
    pub load: f64,
}

/// ACWR risk classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrStatus {
    /// Ratio below 0.8: training below baseline, fitness may erode
    Undertrained,
    /// Ratio 0.8-1.3: the sweet spot
    Optimal,
    /// Ratio above 1.3 up to 1.5: load climbing faster than the base
    Caution,
    /// Ratio above 1.5: spike associated with elevated injury risk
    Danger,
}

/// Acute:chronic workload ratio with classification and guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcwrResult {
    /// Total load over the acute window
    pub acute_load: f64,
    /// Weekly average load over the chronic window
    pub chronic_load: f64,
    /// Acute divided by chronic, rounded to 2 decimals; 1.0 with no history
    pub acwr: f64,
    /// Risk band the ratio falls into
    pub status: AcwrStatus,
    /// Short status message for display
    pub message: String,
    /// Coach-voice guidance for the band
    pub recommendation: String,
}

/// Calculator for the acute:chronic workload ratio
pub struct TrainingLoadRatioCalculator {
    config: WorkloadRatioConfig,
}

impl Default for TrainingLoadRatioCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingLoadRatioCalculator {
    /// Create a calculator with the standard 7/28-day windows and bands
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: WorkloadRatioConfig::default(),
        }
    }

    /// Create a calculator with custom windows or band boundaries
    #[must_use]
    pub fn with_config(config: WorkloadRatioConfig) -> Self {
        Self { config }
    }

    /// Calculate ACWR from acute- and chronic-window session samples
    ///
    /// Samples are re-bucketed against `now` using the configured windows,
    /// so a caller that over-fetches (or passes the same slice for both
    /// arguments) still gets correct sums. Negative loads are treated as
    /// zero. Empty histories yield the neutral default ratio of 1.0 and an
    /// optimal status, so new users never see a false danger signal.
    #[must_use]
    pub fn calculate_acwr(
        &self,
        acute_sessions: &[WorkloadSample],
        chronic_sessions: &[WorkloadSample],
        now: DateTime<Utc>,
    ) -> AcwrResult {
        let acute_cutoff = now - Duration::days(self.config.acute_window_days);
        let chronic_cutoff = now - Duration::days(self.config.chronic_window_days);

        let acute_load = window_sum(acute_sessions, acute_cutoff, now);
        let chronic_total = window_sum(chronic_sessions, chronic_cutoff, now);
        let chronic_load = chronic_total / CHRONIC_WEEKS;

        self.classify_loads(acute_load, chronic_load)
    }

    /// Calculate ACWR from a single session history slice
    ///
    /// Convenience for callers that fetch one 28-day history and let the
    /// calculator carve out the acute window.
    #[must_use]
    pub fn from_history(&self, sessions: &[WorkloadSample], now: DateTime<Utc>) -> AcwrResult {
        self.calculate_acwr(sessions, sessions, now)
    }

    /// Calculate ACWR from pre-summed loads
    ///
    /// For callers that aggregate in SQL: `acute_load` is the 7-day total,
    /// `chronic_total` the 28-day total (normalized to a weekly average
    /// here).
    #[must_use]
    pub fn calculate_acwr_from_loads(&self, acute_load: f64, chronic_total: f64) -> AcwrResult {
        self.classify_loads(acute_load.max(0.0), chronic_total.max(0.0) / CHRONIC_WEEKS)
    }

    /// Form the ratio and classify it into a band
    fn classify_loads(&self, acute_load: f64, chronic_load: f64) -> AcwrResult {
        let raw_ratio = if chronic_load > 0.0 {
            acute_load / chronic_load
        } else {
            NO_HISTORY_DEFAULT_RATIO
        };
        let acwr = round_ratio(raw_ratio);

        let status = if acwr < self.config.undertrained_max {
            AcwrStatus::Undertrained
        } else if acwr <= self.config.optimal_max {
            AcwrStatus::Optimal
        } else if acwr <= self.config.caution_max {
            AcwrStatus::Caution
        } else {
            AcwrStatus::Danger
        };

        debug!(acute_load, chronic_load, acwr, status = ?status, "calculated workload ratio");

        let (message, recommendation) = band_copy(status);
        AcwrResult {
            acute_load,
            chronic_load,
            acwr,
            status,
            message: message.to_owned(),
            recommendation: recommendation.to_owned(),
        }
    }
}

/// Sum the loads of sessions falling inside `[cutoff, now]`
///
/// Both window edges are inclusive: a session exactly 7 days old still
/// belongs to the acute window.
fn window_sum(sessions: &[WorkloadSample], cutoff: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    sessions
        .iter()
        .filter(|s| s.completed_at >= cutoff && s.completed_at <= now)
        .map(|s| s.load.max(0.0))
        .sum()
}

/// Round a ratio to 2 decimal places for display and band comparison
fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Fixed message and recommendation pair per band
const fn band_copy(status: AcwrStatus) -> (&'static str, &'static str) {
    match status {
        AcwrStatus::Undertrained => (
            "Training load is below your recent baseline.",
            "Safe to add volume. Build back gradually rather than jumping to old numbers.",
        ),
        AcwrStatus::Optimal => (
            "Training load is in the optimal zone.",
            "Current load balances progress and injury risk well. Keep it up.",
        ),
        AcwrStatus::Caution => (
            "Training load is climbing faster than your base.",
            "Hold volume steady this week and let your chronic load catch up.",
        ),
        AcwrStatus::Danger => (
            "Training load has spiked well above your baseline.",
            "Cut back volume now; load spikes like this carry elevated injury risk.",
        ),
    }
}

/// Derive a session's scalar load from its lifted volume and duration
///
/// `total_volume` is `sum(weight x reps)` across all sets; minutes are
/// weighted so conditioning-only sessions still register load.
#[must_use]
pub fn session_load(total_volume: f64, duration_minutes: f64) -> f64 {
    total_volume.max(0.0) + duration_minutes.max(0.0) * DURATION_LOAD_FACTOR
}

/// Calculate ACWR with the standard windows and bands
#[must_use]
pub fn calculate_acwr(
    acute_sessions: &[WorkloadSample],
    chronic_sessions: &[WorkloadSample],
    now: DateTime<Utc>,
) -> AcwrResult {
    TrainingLoadRatioCalculator::new().calculate_acwr(acute_sessions, chronic_sessions, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(days_ago: i64, load: f64) -> WorkloadSample {
        WorkloadSample {
            completed_at: Utc::now() - Duration::days(days_ago),
            load,
        }
    }

    #[test]
    fn test_empty_history_defaults_to_optimal() {
        let result = calculate_acwr(&[], &[], Utc::now());
        assert!((result.acute_load).abs() < f64::EPSILON);
        assert!((result.chronic_load).abs() < f64::EPSILON);
        assert!((result.acwr - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.status, AcwrStatus::Optimal);
    }

    #[test]
    fn test_steady_training_is_optimal() {
        // 1000 load every other day for 4 weeks: acute 3000-4000, chronic ~3500/week
        let history: Vec<WorkloadSample> =
            (0..14).map(|i| sample(i64::from(i) * 2 + 1, 1000.0)).collect();
        let result = TrainingLoadRatioCalculator::new().from_history(&history, Utc::now());
        assert_eq!(result.status, AcwrStatus::Optimal);
    }

    #[test]
    fn test_ratio_monotone_in_acute_load() {
        let calc = TrainingLoadRatioCalculator::new();
        let mut last = -1.0;
        for acute in [500.0, 1000.0, 2000.0, 4000.0, 8000.0] {
            let result = calc.calculate_acwr_from_loads(acute, 8000.0);
            assert!(result.acwr > last);
            last = result.acwr;
        }
    }

    #[test]
    fn test_band_boundaries() {
        let calc = TrainingLoadRatioCalculator::new();
        // chronic_total 4000 => chronic weekly 1000
        assert_eq!(
            calc.calculate_acwr_from_loads(790.0, 4000.0).status,
            AcwrStatus::Undertrained
        );
        assert_eq!(
            calc.calculate_acwr_from_loads(800.0, 4000.0).status,
            AcwrStatus::Optimal
        );
        assert_eq!(
            calc.calculate_acwr_from_loads(1300.0, 4000.0).status,
            AcwrStatus::Optimal
        );
        assert_eq!(
            calc.calculate_acwr_from_loads(1310.0, 4000.0).status,
            AcwrStatus::Caution
        );
        assert_eq!(
            calc.calculate_acwr_from_loads(1500.0, 4000.0).status,
            AcwrStatus::Caution
        );
        assert_eq!(
            calc.calculate_acwr_from_loads(1510.0, 4000.0).status,
            AcwrStatus::Danger
        );
    }

    #[test]
    fn test_ratio_rounded_to_two_decimals() {
        let calc = TrainingLoadRatioCalculator::new();
        let result = calc.calculate_acwr_from_loads(1000.0, 12000.0);
        // 1000 / 3000 = 0.333... rounds to 0.33
        assert!((result.acwr - 0.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stale_sessions_fall_out_of_windows() {
        let history = vec![sample(2, 5000.0), sample(10, 1000.0), sample(40, 9999.0)];
        let result = TrainingLoadRatioCalculator::new().from_history(&history, Utc::now());
        // 40-day-old session is outside both windows
        assert!((result.acute_load - 5000.0).abs() < f64::EPSILON);
        assert!((result.chronic_load - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_loads_ignored() {
        let history = vec![sample(1, -500.0), sample(2, 1000.0)];
        let result = TrainingLoadRatioCalculator::new().from_history(&history, Utc::now());
        assert!((result.acute_load - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_session_load_formula() {
        // 10000 volume + 45 minutes * 100
        assert!((session_load(10_000.0, 45.0) - 14_500.0).abs() < f64::EPSILON);
        assert!((session_load(-10.0, -5.0)).abs() < f64::EPSILON);
    }
}
