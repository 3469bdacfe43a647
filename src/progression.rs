// ABOUTME: Progressive-overload decision policy for the next session's working weight
// ABOUTME: Increase, decrease, or maintain based on logged reps vs the rep goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

//! # Progressive Overload Advisor
//!
//! Turns a logged exercise's target vs actual performance into a concrete
//! recommendation for the next session. The policy is evaluated in strict
//! precedence order:
//!
//! 1. Every recorded set reached the rep goal and at least the prescribed
//!    number of sets was completed: **increase**.
//! 2. Average reps fell well short of the goal (two full reps or 25%
//!    below): **decrease**.
//! 3. Anything in between: **maintain** at exactly the current weight.
//!
//! Suggested weights are always strictly positive; the decrease branch
//! floors at half the current weight rather than letting a fixed step push
//! a light lift to zero.

use crate::config::ProgressionConfig;
use crate::errors::{IntelligenceError, IntelligenceResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A logged exercise's prescription and recorded performance
///
/// `actual_reps` holds one entry per set actually performed; it may be
/// shorter than `target_sets` when the lifter cut the exercise short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPerformance {
    /// Exercise this performance belongs to
    pub exercise_name: String,
    /// Prescribed working weight
    pub target_weight: f64,
    /// Prescribed number of sets
    pub target_sets: u32,
    /// Prescribed reps per set
    pub target_reps: u32,
    /// Reps completed in each recorded set
    pub actual_reps: Vec<u32>,
}

/// Direction of the recommended weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionChange {
    /// All sets hit the goal; add weight next session
    Increase,
    /// Performance fell well short; back off and rebuild
    Decrease,
    /// Close to the goal; repeat the weight until all sets are earned
    Maintain,
}

/// Recommendation for the next session's working weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionDecision {
    /// Direction of the change
    pub change: ProgressionChange,
    /// Suggested working weight, always strictly positive
    pub next_weight: f64,
    /// Human-readable explanation of which rule fired and why
    pub reason: String,
}

/// Advisor applying the progressive-overload decision policy
pub struct ProgressiveOverloadAdvisor {
    config: ProgressionConfig,
}

impl Default for ProgressiveOverloadAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressiveOverloadAdvisor {
    /// Create an advisor with the default step policy
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProgressionConfig::default(),
        }
    }

    /// Create an advisor with a custom step policy
    #[must_use]
    pub fn with_config(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Recommend the next session's working weight for an exercise
    ///
    /// `target_reps_goal` is the rep count a set must reach to count as a
    /// hit; it is carried separately from the prescription's `target_reps`
    /// so coaches can progress against a stricter goal than the program
    /// card shows.
    ///
    /// Non-positive scalar inputs clamp to their minimum valid values.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `actual_reps` is empty (there is no
    /// performance to advise on) and `ValueOutOfRange` if `current_weight`
    /// is NaN or infinite, since no meaningful clamp exists for those.
    pub fn calculate_next_weight(
        &self,
        exercise_name: &str,
        current_weight: f64,
        target_sets: u32,
        target_reps: u32,
        actual_reps: &[u32],
        target_reps_goal: u32,
    ) -> IntelligenceResult<ProgressionDecision> {
        if actual_reps.is_empty() {
            return Err(IntelligenceError::invalid_input(format!(
                "No recorded sets for {exercise_name}: actual_reps must not be empty"
            )));
        }
        if !current_weight.is_finite() {
            return Err(IntelligenceError::value_out_of_range(format!(
                "Current weight for {exercise_name} must be a finite number, got {current_weight}"
            )));
        }

        // Only non-positive weights clamp; any valid weight, however light,
        // passes through so maintain can echo it exactly
        let current_weight = if current_weight > 0.0 {
            current_weight
        } else {
            self.config.rounding_increment
        };
        let target_sets = target_sets.max(1);
        // A zero goal falls back to the prescription's rep target
        let goal = if target_reps_goal == 0 {
            f64::from(target_reps.max(1))
        } else {
            f64::from(target_reps_goal)
        };

        let all_sets_hit_target = actual_reps.len() >= target_sets as usize
            && actual_reps.iter().all(|&reps| f64::from(reps) >= goal);
        let average_reps =
            actual_reps.iter().map(|&r| f64::from(r)).sum::<f64>() / actual_reps.len() as f64;

        let decision = if all_sets_hit_target {
            let next_weight = self.increased_weight(current_weight);
            ProgressionDecision {
                change: ProgressionChange::Increase,
                next_weight,
                reason: format!(
                    "All {} sets reached the {goal}-rep goal; increasing from {current_weight} to {next_weight}",
                    actual_reps.len()
                ),
            }
        } else if self.is_bad_miss(average_reps, goal) {
            let next_weight = self.decreased_weight(current_weight);
            ProgressionDecision {
                change: ProgressionChange::Decrease,
                next_weight,
                reason: format!(
                    "Averaged {average_reps:.1} reps against a goal of {goal}; reducing from {current_weight} to {next_weight} to rebuild"
                ),
            }
        } else {
            ProgressionDecision {
                change: ProgressionChange::Maintain,
                next_weight: current_weight,
                reason: format!(
                    "Averaged {average_reps:.1} reps against a goal of {goal}; holding {current_weight} until every set hits the goal"
                ),
            }
        };

        debug!(
            exercise = exercise_name,
            change = ?decision.change,
            current_weight,
            next_weight = decision.next_weight,
            average_reps,
            "progression decision"
        );
        Ok(decision)
    }

    /// Recommend the next working weight from a logged [`SetPerformance`]
    ///
    /// # Errors
    /// Returns `InvalidInput` if the performance has no recorded sets.
    pub fn advise(
        &self,
        performance: &SetPerformance,
        target_reps_goal: u32,
    ) -> IntelligenceResult<ProgressionDecision> {
        self.calculate_next_weight(
            &performance.exercise_name,
            performance.target_weight,
            performance.target_sets,
            performance.target_reps,
            &performance.actual_reps,
            target_reps_goal,
        )
    }

    /// Whether the average rep count constitutes a bad miss
    fn is_bad_miss(&self, average_reps: f64, goal: f64) -> bool {
        average_reps <= goal - self.config.bad_miss_rep_deficit
            || average_reps <= goal * (1.0 - self.config.bad_miss_fraction)
    }

    /// Increase step: percentage of current with an absolute floor, rounded
    /// to the plate increment; always strictly above current
    fn increased_weight(&self, current: f64) -> f64 {
        let step = round_to_increment(
            (current * self.config.increase_percent).max(self.config.min_increase_step),
            self.config.rounding_increment,
        )
        .max(self.config.rounding_increment);
        current + step
    }

    /// Decrease step: percentage of current rounded to the plate increment,
    /// floored at half the current weight so the result stays strictly
    /// positive and strictly below current regardless of magnitude
    fn decreased_weight(&self, current: f64) -> f64 {
        let step = round_to_increment(
            current * self.config.decrease_percent,
            self.config.rounding_increment,
        )
        .max(self.config.rounding_increment);
        let candidate = current - step;
        if candidate > 0.0 {
            candidate.max(current / 2.0)
        } else {
            current / 2.0
        }
    }
}

/// Round a weight to the nearest multiple of `increment`
fn round_to_increment(weight: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return weight;
    }
    (weight / increment).round() * increment
}

/// Recommend the next working weight using the default step policy
///
/// # Errors
/// Returns `InvalidInput` if `actual_reps` is empty.
pub fn calculate_next_weight(
    exercise_name: &str,
    current_weight: f64,
    target_sets: u32,
    target_reps: u32,
    actual_reps: &[u32],
    target_reps_goal: u32,
) -> IntelligenceResult<ProgressionDecision> {
    ProgressiveOverloadAdvisor::new().calculate_next_weight(
        exercise_name,
        current_weight,
        target_sets,
        target_reps,
        actual_reps,
        target_reps_goal,
    )
}
