// ABOUTME: Integration tests for one-rep-max estimation and barbell plate math
// ABOUTME: Validates decomposition exactness, maximality, and formula identities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FORC3 Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use forc3_intelligence::{
    calculate_plates, estimate_one_rep_max, OneRepMaxFormula, WeightUnit,
};

#[test]
fn test_two_forty_five_plates_per_side() {
    let breakdown = calculate_plates(225.0, WeightUnit::Lbs);
    assert!((breakdown.bar - 45.0).abs() < f64::EPSILON);
    assert_eq!(breakdown.plates_per_side.len(), 1);
    assert!((breakdown.plates_per_side[0].weight - 45.0).abs() < f64::EPSILON);
    assert_eq!(breakdown.plates_per_side[0].count, 2);
    assert!((breakdown.total_weight - 225.0).abs() < f64::EPSILON);
}

#[test]
fn test_decomposition_exact_and_maximal() {
    // P10: recomputed total matches the plate counts, never overshoots,
    // and is the best achievable weight under the target
    for unit in [WeightUnit::Lbs, WeightUnit::Kg] {
        let (bar, granularity) = match unit {
            WeightUnit::Lbs => (45.0, 5.0),
            WeightUnit::Kg => (20.0, 2.5),
        };
        let mut target = bar;
        while target < bar + 300.0 {
            let breakdown = calculate_plates(target, unit);
            let per_side: f64 = breakdown
                .plates_per_side
                .iter()
                .map(|p| p.weight * f64::from(p.count))
                .sum();
            // Exactness: total is what the listed plates actually weigh
            assert!((breakdown.total_weight - (breakdown.bar + per_side * 2.0)).abs() < 1e-9);
            // Never overshoots
            assert!(breakdown.total_weight <= target + 1e-9);
            // Maximality: the gap is below the smallest loadable pair
            assert!(target - breakdown.total_weight < granularity);
            target += 1.0;
        }
    }
}

#[test]
fn test_no_zero_count_entries() {
    let breakdown = calculate_plates(135.0, WeightUnit::Lbs);
    assert!(breakdown.plates_per_side.iter().all(|p| p.count > 0));
}

#[test]
fn test_below_bar_target_is_bar_only() {
    let breakdown = calculate_plates(30.0, WeightUnit::Lbs);
    assert!(breakdown.plates_per_side.is_empty());
    assert!((breakdown.total_weight - 45.0).abs() < f64::EPSILON);
}

#[test]
fn test_one_rep_max_identity_at_single_rep() {
    // P9: estimate(w, 1) == w
    for weight in [45.0, 135.5, 225.0, 502.5] {
        assert!((estimate_one_rep_max(weight, 1) - weight).abs() < f64::EPSILON);
    }
}

#[test]
fn test_one_rep_max_grows_with_reps() {
    let mut last = 0.0;
    for reps in 1..=12 {
        let est = estimate_one_rep_max(200.0, reps);
        assert!(est > last, "estimate not increasing at {reps} reps");
        last = est;
    }
}

#[test]
fn test_formula_selection_serializes() {
    let json = serde_json::to_string(&OneRepMaxFormula::Brzycki).unwrap();
    assert_eq!(json, "\"brzycki\"");
    let parsed: OneRepMaxFormula = serde_json::from_str("\"average\"").unwrap();
    assert_eq!(parsed, OneRepMaxFormula::Average);
}

#[test]
fn test_breakdown_serializes_unit_lowercase() {
    let json = serde_json::to_value(calculate_plates(100.0, WeightUnit::Kg)).unwrap();
    assert_eq!(json["unit"], "kg");
}
