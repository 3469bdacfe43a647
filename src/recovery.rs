// ABOUTME: Recovery scoring from recent training frequency, intensity, and self-reported wellness
// ABOUTME: Linear model starting at 100, clamped to 0-100, classified into five status bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

//! # Recovery Score Engine
//!
//! Aggregates recent training load signals and optional self-reported
//! wellness into a 0-100 recovery score. The model is a linear penalty and
//! credit ladder: hard sessions and training streaks subtract, rest days
//! and above-baseline sleep or energy add back.
//!
//! # Scientific References
//!
//! - Halson, S.L. (2014). Monitoring training load to understand fatigue in
//!   athletes. *Sports Medicine*, 44(Suppl 2), S139-147.
//!   <https://doi.org/10.1007/s40279-014-0253-z>
//! - Saw, A.E., et al. (2016). Monitoring the athlete training response:
//!   subjective self-reported measures trump commonly used objective
//!   measures. *British Journal of Sports Medicine*, 50(5), 281-291.

use crate::config::RecoveryScoringConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Points subtracted per hard workout in the last 3 days
const HARD_WORKOUT_PENALTY: f64 = 15.0;

/// Points subtracted per workout (of any intensity) in the last 3 days
const WORKOUT_PENALTY: f64 = 8.0;

/// Training streak length that triggers the flat streak penalty
const STREAK_PENALTY_THRESHOLD: u32 = 5;

/// Flat penalty for a streak of `STREAK_PENALTY_THRESHOLD`+ training days
const STREAK_PENALTY: f64 = 20.0;

/// Points added per rest day in the last 7 days
const REST_DAY_CREDIT: f64 = 10.0;

/// Self-reported sleep baseline on the 1-10 scale; above adds, below subtracts
const SLEEP_BASELINE: f64 = 7.0;

/// Points per sleep-scale unit away from baseline
const SLEEP_WEIGHT: f64 = 3.0;

/// Self-reported energy baseline on the 1-10 scale
const ENERGY_BASELINE: f64 = 6.0;

/// Points per energy-scale unit away from baseline
const ENERGY_WEIGHT: f64 = 2.0;

/// Caller-aggregated recovery signals
///
/// All counts are computed by the API layer from persisted workout logs;
/// the engine never queries storage. Out-of-range values clamp: rest days
/// to 0-7 and the wellness scales to 1-10.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecoveryInput {
    /// Workouts completed in the last 3 days
    pub workouts_last_3_days: u32,
    /// Hard (high-intensity) workouts in the last 3 days
    pub hard_workouts_last_3_days: u32,
    /// Full rest days in the last 7 days
    pub rest_days_last_7_days: u32,
    /// Current consecutive training-day streak
    pub consecutive_training_days: u32,
    /// Self-reported sleep quality, 1-10
    pub user_reported_sleep: Option<f64>,
    /// Self-reported energy level, 1-10
    pub user_reported_energy: Option<f64>,
}

/// Recovery status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// Score 85+: fully recovered, ready for high intensity
    Excellent,
    /// Score 70-84: recovered, normal training appropriate
    Good,
    /// Score 55-69: partially recovered, moderate intensity
    Moderate,
    /// Score 40-54: under-recovered, light training only
    Low,
    /// Score below 40: rest day needed
    RestNeeded,
}

/// Recovery score with classification and coaching guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryResult {
    /// Recovery score, always within 0-100
    pub score: u8,
    /// Status band the score falls into
    pub status: RecoveryStatus,
    /// Canned coach-voice guidance for the status
    pub recommendation: String,
}

/// Engine applying the linear recovery scoring model
pub struct RecoveryScoreEngine {
    config: RecoveryScoringConfig,
}

impl Default for RecoveryScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryScoreEngine {
    /// Create an engine with the standard classification bands
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RecoveryScoringConfig::default(),
        }
    }

    /// Create an engine with custom classification bands
    #[must_use]
    pub fn with_config(config: RecoveryScoringConfig) -> Self {
        Self { config }
    }

    /// Calculate the recovery score for the given signals
    ///
    /// Total over all inputs: extreme values clamp rather than error, and
    /// the score is always within 0-100.
    #[must_use]
    pub fn calculate_recovery_score(&self, input: &RecoveryInput) -> RecoveryResult {
        let mut score = 100.0;

        score -= HARD_WORKOUT_PENALTY * f64::from(input.hard_workouts_last_3_days);
        score -= WORKOUT_PENALTY * f64::from(input.workouts_last_3_days);
        if input.consecutive_training_days >= STREAK_PENALTY_THRESHOLD {
            score -= STREAK_PENALTY;
        }
        score += REST_DAY_CREDIT * f64::from(input.rest_days_last_7_days.min(7));

        if let Some(sleep) = input.user_reported_sleep {
            score += (sleep.clamp(1.0, 10.0) - SLEEP_BASELINE) * SLEEP_WEIGHT;
        }
        if let Some(energy) = input.user_reported_energy {
            score += (energy.clamp(1.0, 10.0) - ENERGY_BASELINE) * ENERGY_WEIGHT;
        }

        let score = score.clamp(0.0, 100.0).round() as u8;
        let status = self.classify(f64::from(score));
        debug!(score, status = ?status, "calculated recovery score");

        RecoveryResult {
            score,
            status,
            recommendation: recommendation_for(status).to_owned(),
        }
    }

    /// Classify a score into its status band, evaluated top-down
    fn classify(&self, score: f64) -> RecoveryStatus {
        if score >= self.config.excellent_threshold {
            RecoveryStatus::Excellent
        } else if score >= self.config.good_threshold {
            RecoveryStatus::Good
        } else if score >= self.config.moderate_threshold {
            RecoveryStatus::Moderate
        } else if score >= self.config.low_threshold {
            RecoveryStatus::Low
        } else {
            RecoveryStatus::RestNeeded
        }
    }
}

/// Canned coach-voice recommendation per status
///
/// The status mapping is the contract; the copy itself is a UX concern and
/// may be reworded without breaking callers.
const fn recommendation_for(status: RecoveryStatus) -> &'static str {
    match status {
        RecoveryStatus::Excellent => {
            "You're fully recovered. Great day to push intensity or chase a personal record."
        }
        RecoveryStatus::Good => {
            "Recovery looks good. Train as planned and keep an eye on how the first sets feel."
        }
        RecoveryStatus::Moderate => {
            "Partially recovered. Keep today's session moderate and prioritize sleep tonight."
        }
        RecoveryStatus::Low => {
            "Recovery is running low. Stick to light technique work or easy conditioning."
        }
        RecoveryStatus::RestNeeded => {
            "Your body needs a break. Take a rest day; mobility work and a walk are plenty."
        }
    }
}

/// Calculate a recovery score using the standard classification bands
#[must_use]
pub fn calculate_recovery_score(input: &RecoveryInput) -> RecoveryResult {
    RecoveryScoreEngine::new().calculate_recovery_score(input)
}
