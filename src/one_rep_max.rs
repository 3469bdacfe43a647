// ABOUTME: One-rep-max estimation from a submaximal (weight, reps) set
// ABOUTME: Enum-dispatched Epley and Brzycki formulas with an averaging default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

//! # One-Rep-Max Estimation
//!
//! Converts a logged working set into an estimated single-rep maximum.
//! Two independent formulas are supported and averaged by default, since
//! Epley tends to over-estimate and Brzycki to under-estimate at moderate
//! rep ranges; the two agree exactly at 10 reps.
//!
//! # Scientific References
//!
//! - Epley, B. (1985). Poundage Chart. *Boyd Epley Workout*. Lincoln, NE.
//! - Brzycki, M. (1993). Strength testing: Predicting a one-rep max from
//!   reps-to-fatigue. *JOPERD*, 64(1), 88-90.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Epley rep divisor: each rep adds 1/30th of the bar weight
const EPLEY_REP_DIVISOR: f64 = 30.0;

/// Brzycki numerator constant
const BRZYCKI_NUMERATOR: f64 = 36.0;

/// Brzycki rep offset; the formula degenerates as reps approach this value
const BRZYCKI_REP_OFFSET: f64 = 37.0;

/// Fallback multiplier when reps are too high for Brzycki to stay defined
const HIGH_REP_FALLBACK_MULTIPLIER: f64 = 1.5;

/// One-rep-max estimation formula selection
///
/// Enum dispatch keeps the built-in formulas allocation-free while leaving
/// room to add further estimators (Lombardi, Wathan) without breaking the
/// serialized representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// Epley: `weight * (1 + reps/30)`
    Epley,
    /// Brzycki: `weight * 36 / (37 - reps)`, with a high-rep guard at 37+
    Brzycki,
    /// Rounded mean of Epley and Brzycki (recommended)
    #[default]
    Average,
}

impl OneRepMaxFormula {
    /// Estimate a one-rep max from a submaximal set
    ///
    /// Reps below 1 are treated as 1; a single-rep set is returned unchanged
    /// since there is nothing to extrapolate. The `Average` variant rounds
    /// to the nearest whole unit, matching how the estimate is displayed.
    #[must_use]
    pub fn estimate(self, weight: f64, reps: u32) -> f64 {
        let weight = weight.max(0.0);
        let reps = reps.max(1);
        if reps == 1 {
            return weight;
        }

        let estimate = match self {
            Self::Epley => epley(weight, reps),
            Self::Brzycki => brzycki(weight, reps),
            Self::Average => ((epley(weight, reps) + brzycki(weight, reps)) / 2.0).round(),
        };
        trace!(formula = ?self, weight, reps, estimate, "estimated one-rep max");
        estimate
    }
}

/// Epley formula: linear rep credit
fn epley(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + f64::from(reps) / EPLEY_REP_DIVISOR)
}

/// Brzycki formula: hyperbolic rep credit
///
/// Undefined at 37 reps and negative beyond, so very high rep counts fall
/// back to a flat multiplier.
fn brzycki(weight: f64, reps: u32) -> f64 {
    if f64::from(reps) >= BRZYCKI_REP_OFFSET {
        return weight * HIGH_REP_FALLBACK_MULTIPLIER;
    }
    weight * (BRZYCKI_NUMERATOR / (BRZYCKI_REP_OFFSET - f64::from(reps)))
}

/// Estimate a one-rep max using the default averaged formula
///
/// Convenience entry point for API collaborators that do not care about
/// formula selection.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    OneRepMaxFormula::default().estimate(weight, reps)
}

/// Weight corresponding to a percentage of a one-rep max
///
/// Percent is clamped to be non-negative; values above 100 are legal
/// (overload waves prescribe 102-105% singles).
#[must_use]
pub fn percentage_of_max(one_rep_max: f64, percent: f64) -> f64 {
    one_rep_max.max(0.0) * (percent.max(0.0) / 100.0)
}

/// Predicted weight liftable for `reps` given a one-rep max (inverse Epley)
///
/// Used by program generation to turn an estimated max back into working
/// set prescriptions.
#[must_use]
pub fn rep_max(one_rep_max: f64, reps: u32) -> f64 {
    let reps = reps.max(1);
    one_rep_max.max(0.0) / (1.0 + f64::from(reps) / EPLEY_REP_DIVISOR)
}
