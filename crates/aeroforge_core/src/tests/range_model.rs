//! Tests for the electric Breguet range model

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{NoiseModel, ParameterSet};
use crate::range_model::{MAX_RANGE_KM, range_km};
use crate::simulation::run_montecarlo_with;

/// Hand-computed reference for the nominal parameters
fn nominal_reference_km() -> f64 {
    let pack_wh = 450.0 * 25_000.0;
    let harvest_wh = 15.0 * 1000.0 * 6.0;
    let usable_wh = 0.92 * 1.08 * (pack_wh + harvest_wh);
    usable_wh / (9.80665 * 22.0 * 0.00015 * 80_000.0) / 1000.0
}

#[test]
fn test_nominal_matches_hand_calculation() {
    let km = range_km(&ParameterSet::default());
    assert!((km - nominal_reference_km()).abs() < 1e-9);
    // ~4352 m
    assert!((km - 4.35).abs() < 0.01, "got {km} km");
}

#[test]
fn test_zero_noise_single_run_reproduces_reference() {
    let run = run_montecarlo_with(ParameterSet::default(), NoiseModel::deterministic(), 1, 42)
        .unwrap();
    assert_eq!(run.len(), 1);
    assert!((run.results.as_slice()[0] - nominal_reference_km()).abs() < 1e-9);
}

#[test]
fn test_output_always_within_clamp() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..5_000 {
        let p = ParameterSet {
            eta_system: rng.random_range(0.0..1.5),
            epack_wh_per_kg: rng.random_range(-500.0..5_000.0),
            m_batt_kg: rng.random_range(0.0..100_000.0),
            m_total_kg: rng.random_range(1.0..200_000.0),
            l_over_d: rng.random_range(0.1..60.0),
            sfc_eq: rng.random_range(1e-7..1e-3),
            harvest_kw: rng.random_range(-100.0..1_000.0),
            sic_efficiency_gain: rng.random_range(0.5..2.0),
            cruise_hours: rng.random_range(0.0..48.0),
            ..Default::default()
        };
        let km = range_km(&p);
        assert!((0.0..=MAX_RANGE_KM).contains(&km), "{km} out of bounds for {p:?}");
    }
}

#[test]
fn test_range_non_decreasing_in_pack_energy() {
    let mut previous = 0.0;
    for step in 0..200 {
        let p = ParameterSet {
            epack_wh_per_kg: 200.0 + 10.0 * step as f64,
            ..Default::default()
        };
        let km = range_km(&p);
        assert!(km >= previous, "range fell at epack step {step}");
        previous = km;
    }
}

/// Lift-to-drag sits in the denominator of this closed form, so more L/D
/// means less range. Pin that down so a change to the formula is noticed.
#[test]
fn test_range_non_increasing_in_lift_to_drag() {
    let mut previous = f64::INFINITY;
    for step in 0..100 {
        let p = ParameterSet {
            l_over_d: 15.0 + 0.5 * step as f64,
            ..Default::default()
        };
        let km = range_km(&p);
        assert!(km <= previous, "range rose at l_over_d step {step}");
        previous = km;
    }
}
