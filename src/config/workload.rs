// ABOUTME: Acute:chronic workload ratio window lengths and classification bands
// ABOUTME: Defaults follow the sports-science consensus thresholds (0.8 / 1.3 / 1.5)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

use serde::{Deserialize, Serialize};

/// Default acute window: trailing 7 days
pub const DEFAULT_ACUTE_WINDOW_DAYS: i64 = 7;

/// Default chronic window: trailing 28 days (four acute windows)
pub const DEFAULT_CHRONIC_WINDOW_DAYS: i64 = 28;

/// Ratios below this indicate undertraining
///
/// Reference: Gabbett, T.J. (2016). The training-injury prevention paradox.
/// <https://bjsm.bmj.com/content/50/5/273>
pub const DEFAULT_UNDERTRAINED_MAX: f64 = 0.8;

/// Upper bound of the optimal training zone
pub const DEFAULT_OPTIMAL_MAX: f64 = 1.3;

/// Upper bound of the caution zone; above this is the danger zone
pub const DEFAULT_CAUTION_MAX: f64 = 1.5;

/// Window lengths and band boundaries for ACWR classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadRatioConfig {
    /// Days in the acute (short-term fatigue) window
    pub acute_window_days: i64,
    /// Days in the chronic (baseline fitness) window
    pub chronic_window_days: i64,
    /// Ratio below this is undertrained
    pub undertrained_max: f64,
    /// Ratio in (`undertrained_max`, `optimal_max`] is optimal
    pub optimal_max: f64,
    /// Ratio in (`optimal_max`, `caution_max`] is caution; above is danger
    pub caution_max: f64,
}

impl Default for WorkloadRatioConfig {
    fn default() -> Self {
        Self {
            acute_window_days: DEFAULT_ACUTE_WINDOW_DAYS,
            chronic_window_days: DEFAULT_CHRONIC_WINDOW_DAYS,
            undertrained_max: DEFAULT_UNDERTRAINED_MAX,
            optimal_max: DEFAULT_OPTIMAL_MAX,
            caution_max: DEFAULT_CAUTION_MAX,
        }
    }
}
