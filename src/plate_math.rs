// ABOUTME: Barbell plate decomposition for a target load
// ABOUTME: Greedy per-side breakdown over a plate inventory with recomputed achievable total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

//! # Plate Math
//!
//! Decomposes a target barbell load into plates per side. Both standard
//! inventories form canonical coin systems (every denomination at least
//! doubles the next smaller one's contribution), so the greedy largest-first
//! decomposition is exact and maximal: the returned total is the heaviest
//! loadable weight that does not exceed the target.

use crate::config::PlateInventory;
use crate::errors::IntelligenceResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remainders are re-rounded to this many decimal places after each
/// subtraction so accumulated float drift never hides a fitting plate
const REMAINDER_PRECISION: f64 = 100.0;

/// Weight unit for plate calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds (45 lb bar)
    Lbs,
    /// Kilograms (20 kg bar)
    Kg,
}

impl WeightUnit {
    /// Standard gym inventory for this unit
    #[must_use]
    pub fn standard_inventory(self) -> PlateInventory {
        match self {
            Self::Lbs => PlateInventory::lbs(),
            Self::Kg => PlateInventory::kg(),
        }
    }
}

/// Count of one plate denomination loaded per side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateCount {
    /// Denomination weight of a single plate
    pub weight: f64,
    /// Number of plates of this denomination per side
    pub count: u32,
}

/// Full breakdown of a barbell load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateBreakdown {
    /// Weight of the empty bar
    pub bar: f64,
    /// Plates per side, largest denomination first, zero counts omitted
    pub plates_per_side: Vec<PlateCount>,
    /// Actual achievable load: bar + 2 x sum of per-side plates
    ///
    /// Recomputed from the decomposition rather than echoing the request,
    /// so it reflects plate granularity (never exceeds the target).
    pub total_weight: f64,
    /// Unit the breakdown was computed in
    pub unit: WeightUnit,
}

/// Calculator for barbell plate decomposition
pub struct PlateCalculator {
    inventory: PlateInventory,
    unit: WeightUnit,
}

impl PlateCalculator {
    /// Create a calculator with the standard inventory for a unit
    #[must_use]
    pub fn new(unit: WeightUnit) -> Self {
        Self {
            inventory: unit.standard_inventory(),
            unit,
        }
    }

    /// Create a calculator over a custom inventory, e.g. a home-gym rack
    ///
    /// # Errors
    /// Returns `InvalidInput` if the inventory has no positive denominations.
    pub fn with_inventory(
        unit: WeightUnit,
        bar_weight: f64,
        plates: Vec<f64>,
    ) -> IntelligenceResult<Self> {
        Ok(Self {
            inventory: PlateInventory::custom(bar_weight, plates)?,
            unit,
        })
    }

    /// Decompose a target load into plates per side
    ///
    /// Targets below the bar weight (including negatives) clamp to a
    /// bar-only result.
    #[must_use]
    pub fn calculate(&self, target_weight: f64) -> PlateBreakdown {
        let bar = self.inventory.bar_weight;
        let mut remaining = round_remainder((target_weight - bar).max(0.0) / 2.0);
        let mut plates_per_side = Vec::new();
        let mut per_side_total = 0.0;

        for &plate in &self.inventory.plates {
            let count = (remaining / plate).floor() as u32;
            if count == 0 {
                continue;
            }
            per_side_total += plate * f64::from(count);
            remaining = round_remainder(remaining - plate * f64::from(count));
            plates_per_side.push(PlateCount {
                weight: plate,
                count,
            });
        }

        let total_weight = bar + per_side_total * 2.0;
        debug!(
            target_weight,
            total_weight,
            leftover_per_side = remaining,
            "decomposed barbell load"
        );

        PlateBreakdown {
            bar,
            plates_per_side,
            total_weight,
            unit: self.unit,
        }
    }
}

/// Snap a running remainder back onto a two-decimal grid
fn round_remainder(value: f64) -> f64 {
    (value * REMAINDER_PRECISION).round() / REMAINDER_PRECISION
}

/// Decompose a target load using the standard inventory for `unit`
#[must_use]
pub fn calculate_plates(target_weight: f64, unit: WeightUnit) -> PlateBreakdown {
    PlateCalculator::new(unit).calculate(target_weight)
}
