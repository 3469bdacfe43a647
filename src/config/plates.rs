// ABOUTME: Barbell and plate inventory configuration for load decomposition
// ABOUTME: Standard gym inventories per unit plus support for custom home-gym racks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

use crate::errors::{IntelligenceError, IntelligenceResult};
use serde::{Deserialize, Serialize};

/// Standard olympic bar weight in pounds
pub const BAR_WEIGHT_LBS: f64 = 45.0;

/// Standard olympic bar weight in kilograms
pub const BAR_WEIGHT_KG: f64 = 20.0;

/// Standard plate denominations in pounds, descending
pub const PLATES_LBS: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// Standard plate denominations in kilograms, descending
pub const PLATES_KG: [f64; 6] = [20.0, 15.0, 10.0, 5.0, 2.5, 1.25];

/// A bar plus the plate denominations available to load onto it
///
/// Denominations are kept sorted descending; the greedy decomposition in
/// [`crate::plate_math`] relies on that ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateInventory {
    /// Weight of the empty bar
    pub bar_weight: f64,
    /// Available plate denominations, largest first
    pub plates: Vec<f64>,
}

impl PlateInventory {
    /// Standard pound inventory (45 lb bar, 45/35/25/10/5/2.5 plates)
    #[must_use]
    pub fn lbs() -> Self {
        Self {
            bar_weight: BAR_WEIGHT_LBS,
            plates: PLATES_LBS.to_vec(),
        }
    }

    /// Standard kilogram inventory (20 kg bar, 20/15/10/5/2.5/1.25 plates)
    #[must_use]
    pub fn kg() -> Self {
        Self {
            bar_weight: BAR_WEIGHT_KG,
            plates: PLATES_KG.to_vec(),
        }
    }

    /// Build a custom inventory, e.g. for a home gym with a partial plate set
    ///
    /// Denominations are sorted descending and non-positive entries dropped.
    ///
    /// # Errors
    /// Returns `InvalidInput` if no positive denomination remains.
    pub fn custom(bar_weight: f64, mut plates: Vec<f64>) -> IntelligenceResult<Self> {
        plates.retain(|p| *p > 0.0);
        if plates.is_empty() {
            return Err(IntelligenceError::invalid_input(
                "Plate inventory must contain at least one positive denomination",
            ));
        }
        plates.sort_by(|a, b| b.total_cmp(a));
        Ok(Self {
            bar_weight: bar_weight.max(0.0),
            plates,
        })
    }
}
