//! Tests for the Monte-Carlo runner

use crate::config::MonteCarloConfig;
use crate::error::InvalidInput;
use crate::model::{NoiseModel, ParameterSet, SampleBatch};
use crate::range_model::{range_breakdown, range_km};
use crate::simulation::{evaluate_batch, run_montecarlo, run_montecarlo_with, simulate};

#[test]
fn test_results_aligned_with_samples() {
    let run = run_montecarlo(1_000, 42).unwrap();
    assert_eq!(run.samples.len(), 1_000);
    assert_eq!(run.results.len(), 1_000);

    for (i, &km) in run.results.as_slice().iter().enumerate() {
        let trial = run.samples.trial(i, &run.nominal).unwrap();
        assert_eq!(km.to_bits(), range_km(&trial).to_bits(), "trial {i} misaligned");
    }
}

#[test]
fn test_fixed_fields_held_at_nominal() {
    let nominal = ParameterSet {
        m_batt_kg: 30_000.0,
        cruise_hours: 8.0,
        ..Default::default()
    };
    let run = run_montecarlo_with(nominal, NoiseModel::default(), 50, 1).unwrap();
    assert_eq!(run.nominal, nominal);

    let first = run.samples.trial(0, &run.nominal).unwrap();
    assert_eq!(first.m_batt_kg, 30_000.0);
    assert_eq!(first.cruise_hours, 8.0);
    assert_eq!(first.g, nominal.g);
}

#[test]
fn test_same_seed_is_bit_identical() {
    let a = run_montecarlo(2_000, 42).unwrap();
    let b = run_montecarlo(2_000, 42).unwrap();

    assert_eq!(a.samples, b.samples);
    let bits_a: Vec<u64> = a.results.as_slice().iter().map(|v| v.to_bits()).collect();
    let bits_b: Vec<u64> = b.results.as_slice().iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits_a, bits_b);
}

#[test]
fn test_different_seeds_differ() {
    let a = run_montecarlo(100, 1).unwrap();
    let b = run_montecarlo(100, 2).unwrap();
    assert_ne!(a.results, b.results);
}

#[test]
fn test_zero_runs_rejected() {
    assert_eq!(run_montecarlo(0, 42), Err(InvalidInput::NoRuns));
}

#[test]
fn test_zero_denominator_aborts_run() {
    let nominal = ParameterSet {
        g: 0.0,
        ..Default::default()
    };
    assert_eq!(
        run_montecarlo_with(nominal, NoiseModel::default(), 10, 42),
        Err(InvalidInput::ZeroDenominator)
    );
}

#[test]
fn test_invalid_noise_aborts_run() {
    let mut config = MonteCarloConfig::new(10, 42);
    config.noise.harvest_power.relative_std = f64::NAN;
    assert!(matches!(
        simulate(&config),
        Err(InvalidInput::InvalidNoise { .. })
    ));
}

#[test]
fn test_evaluate_batch_rejects_empty_batch() {
    let run = run_montecarlo(3, 42).unwrap();
    let mut samples = run.samples;
    samples.epack.clear();
    samples.l_over_d.clear();
    samples.harvest.clear();
    samples.sic_gain.clear();
    samples.eta.clear();
    assert_eq!(
        evaluate_batch(&run.nominal, &samples),
        Err(InvalidInput::NoRuns)
    );
}

#[test]
fn test_into_parts() {
    let run = run_montecarlo(5, 42).unwrap();
    let (samples, results, nominal) = run.clone().into_parts();
    assert_eq!(samples, run.samples);
    assert_eq!(results, run.results);
    assert_eq!(nominal, ParameterSet::default());
}

#[test]
fn test_evaluate_batch_rejects_ragged_batch() {
    let samples: SampleBatch = serde_json::from_str(
        r#"{"epack":[400,500],"l_over_d":[20],"harvest":[1,2],"sic_gain":[1,1],"eta":[0.9,0.9]}"#,
    )
    .unwrap();
    assert_eq!(
        evaluate_batch(&ParameterSet::default(), &samples),
        Err(InvalidInput::LengthMismatch {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_efficiency_above_unity_counted() {
    let mut noise = NoiseModel::default();
    noise.sic_efficiency_gain.relative_std = 2.0;
    let run = run_montecarlo_with(ParameterSet::default(), noise, 1_000, 42).unwrap();

    let flagged = run
        .samples
        .trials(&run.nominal)
        .filter(|p| range_breakdown(p).efficiency_exceeds_unity())
        .count();
    assert!(flagged > 0);
    assert_eq!(run.samples.efficiency_above_unity(), flagged);

    let quiet = run_montecarlo_with(ParameterSet::default(), NoiseModel::deterministic(), 10, 42)
        .unwrap();
    assert_eq!(quiet.samples.efficiency_above_unity(), 0);
}
