// ABOUTME: Training-load and progression-analysis engine for the FORC3 fitness platform
// ABOUTME: Pure, synchronous calculators consumed in-process by the API layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

#![deny(unsafe_code)]

//! # FORC3 Intelligence
//!
//! The numeric core of the FORC3 coaching platform: progressive-overload
//! decisions, recovery scoring, acute:chronic workload ratio, one-rep-max
//! estimation, and barbell plate math.
//!
//! Every calculator is a pure, synchronous, side-effect-free function over
//! caller-supplied aggregates. The crate performs no I/O, holds no shared
//! state, and imposes no ordering between calls; API routes gather the
//! inputs from storage, call in, and serialize the returned value objects.
//!
//! ## Modules
//!
//! - **progression**: increase/decrease/maintain decisions for the next
//!   session's working weight
//! - **recovery**: 0-100 recovery score from training frequency and
//!   self-reported wellness
//! - **`workload_ratio`**: acute:chronic workload ratio with injury-risk
//!   bands
//! - **`one_rep_max`**: Epley/Brzycki 1RM estimation
//! - **`plate_math`**: greedy barbell plate decomposition
//! - **config**: named threshold and tuning structs with contract defaults
//! - **errors**: validation-only error taxonomy

/// Threshold and tuning configuration for the calculators
pub mod config;
/// Unified error handling with `IntelligenceError` and `ErrorCode`
pub mod errors;
/// One-rep-max estimation formulas
pub mod one_rep_max;
/// Barbell plate decomposition
pub mod plate_math;
/// Progressive-overload decision policy
pub mod progression;
/// Recovery scoring from training and wellness signals
pub mod recovery;
/// Acute:chronic workload ratio analysis
pub mod workload_ratio;

pub use config::{PlateInventory, ProgressionConfig, RecoveryScoringConfig, WorkloadRatioConfig};
pub use errors::{ErrorCode, IntelligenceError, IntelligenceResult};
pub use one_rep_max::{estimate_one_rep_max, OneRepMaxFormula};
pub use plate_math::{calculate_plates, PlateBreakdown, PlateCalculator, PlateCount, WeightUnit};
pub use progression::{
    calculate_next_weight, ProgressionChange, ProgressionDecision, ProgressiveOverloadAdvisor,
    SetPerformance,
};
pub use recovery::{
    calculate_recovery_score, RecoveryInput, RecoveryResult, RecoveryScoreEngine, RecoveryStatus,
};
pub use workload_ratio::{
    calculate_acwr, session_load, AcwrResult, AcwrStatus, TrainingLoadRatioCalculator,
    WorkloadSample,
};
