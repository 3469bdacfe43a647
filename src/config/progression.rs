// ABOUTME: Tuning knobs for the progressive-overload advisor
// ABOUTME: Step percentages, rounding increment, and bad-miss thresholds with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

use serde::{Deserialize, Serialize};

/// Default increase step as a fraction of current working weight (2.5%)
pub const DEFAULT_INCREASE_PERCENT: f64 = 0.025;

/// Default minimum absolute increase step (5 lb or kg, unit-agnostic)
pub const DEFAULT_MIN_INCREASE_STEP: f64 = 5.0;

/// Default decrease step as a fraction of current working weight (10%)
pub const DEFAULT_DECREASE_PERCENT: f64 = 0.10;

/// Default rounding increment for suggested weights (smallest plate pair)
pub const DEFAULT_ROUNDING_INCREMENT: f64 = 2.5;

/// Default absolute rep shortfall that counts as a bad miss
pub const DEFAULT_BAD_MISS_REP_DEFICIT: f64 = 2.0;

/// Default relative rep shortfall that counts as a bad miss (25% below goal)
pub const DEFAULT_BAD_MISS_FRACTION: f64 = 0.25;

/// Configuration for progressive-overload step sizing
///
/// The decision policy itself (increase / decrease / maintain precedence) is
/// fixed; this struct tunes only the magnitudes and miss thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Increase step as a fraction of current weight
    pub increase_percent: f64,
    /// Floor for the increase step, so light lifts still move meaningfully
    pub min_increase_step: f64,
    /// Decrease step as a fraction of current weight
    pub decrease_percent: f64,
    /// Suggested weights are rounded to this increment
    pub rounding_increment: f64,
    /// Average reps this far below goal triggers a decrease
    pub bad_miss_rep_deficit: f64,
    /// Average reps this fraction below goal triggers a decrease
    pub bad_miss_fraction: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            increase_percent: DEFAULT_INCREASE_PERCENT,
            min_increase_step: DEFAULT_MIN_INCREASE_STEP,
            decrease_percent: DEFAULT_DECREASE_PERCENT,
            rounding_increment: DEFAULT_ROUNDING_INCREMENT,
            bad_miss_rep_deficit: DEFAULT_BAD_MISS_REP_DEFICIT,
            bad_miss_fraction: DEFAULT_BAD_MISS_FRACTION,
        }
    }
}
