// ABOUTME: Recovery score classification band configuration
// ABOUTME: Five non-overlapping status bands evaluated top-down from excellent to rest-needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

use serde::{Deserialize, Serialize};

/// Default score threshold for excellent recovery
pub const DEFAULT_EXCELLENT_THRESHOLD: f64 = 85.0;

/// Default score threshold for good recovery
pub const DEFAULT_GOOD_THRESHOLD: f64 = 70.0;

/// Default score threshold for moderate recovery
pub const DEFAULT_MODERATE_THRESHOLD: f64 = 55.0;

/// Default score threshold for low recovery; below this a rest day is needed
pub const DEFAULT_LOW_THRESHOLD: f64 = 40.0;

/// Classification bands for the 0-100 recovery score
///
/// Bands are evaluated top-down and must stay strictly descending so the
/// five statuses partition the score range with no gaps or overlaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryScoringConfig {
    /// Score at or above this is excellent recovery
    pub excellent_threshold: f64,
    /// Score at or above this is good recovery
    pub good_threshold: f64,
    /// Score at or above this is moderate recovery
    pub moderate_threshold: f64,
    /// Score at or above this is low recovery; anything below needs rest
    pub low_threshold: f64,
}

impl Default for RecoveryScoringConfig {
    fn default() -> Self {
        Self {
            excellent_threshold: DEFAULT_EXCELLENT_THRESHOLD,
            good_threshold: DEFAULT_GOOD_THRESHOLD,
            moderate_threshold: DEFAULT_MODERATE_THRESHOLD,
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}
