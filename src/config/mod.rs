// ABOUTME: Threshold and tuning configuration for the intelligence calculators
// ABOUTME: Named constants with Default impls; no file or environment loading in the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

//! # Calculator Configuration
//!
//! Every classification boundary and tuning weight used by the calculators
//! lives here as a named field with a documented default, keeping the
//! policies auditable and independently testable. Callers construct these
//! structs directly or take [`Default`]; the core never reads files or
//! environment variables.

/// Plate inventory configuration for barbell loading
pub mod plates;
/// Progressive-overload step sizing and miss thresholds
pub mod progression;
/// Recovery score classification bands
pub mod recovery;
/// Acute:chronic workload ratio windows and bands
pub mod workload;

pub use plates::PlateInventory;
pub use progression::ProgressionConfig;
pub use recovery::RecoveryScoringConfig;
pub use workload::WorkloadRatioConfig;
