//! Analysis configuration
//!
//! `AnalysisConfig` is everything needed to reproduce an analysis run. All
//! fields carry serde defaults so a partial file only overrides what it
//! names:
//!
//! ```ignore
//! runs: 5000
//! seed: 7
//! nominal:
//!   epack_wh_per_kg: 500.0
//! noise:
//!   harvest_power:
//!     relative_std: 0.5
//!     floor: 0.0
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};
use crate::model::{NoiseModel, ParameterSet};

pub const DEFAULT_RUNS: usize = 2000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_THRESHOLDS_KM: [f64; 2] = [5_000.0, 10_000.0];
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

fn default_runs() -> usize {
    DEFAULT_RUNS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_thresholds() -> Vec<f64> {
    DEFAULT_THRESHOLDS_KM.to_vec()
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

/// What the Monte-Carlo runner needs for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    pub runs: usize,
    pub seed: u64,
    pub nominal: ParameterSet,
    pub noise: NoiseModel,
}

impl MonteCarloConfig {
    /// Default nominal values and noise model
    #[must_use]
    pub fn new(runs: usize, seed: u64) -> Self {
        Self {
            runs,
            seed,
            nominal: ParameterSet::default(),
            noise: NoiseModel::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(InvalidInput::NoRuns);
        }
        self.nominal.validate()?;
        self.noise.validate()
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RUNS, DEFAULT_SEED)
    }
}

/// Complete analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_runs")]
    pub runs: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub nominal: ParameterSet,
    #[serde(default)]
    pub noise: NoiseModel,
    /// Range targets (km) reported in the achievement table
    #[serde(default = "default_thresholds")]
    pub thresholds_km: Vec<f64>,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            seed: DEFAULT_SEED,
            nominal: ParameterSet::default(),
            noise: NoiseModel::default(),
            thresholds_km: default_thresholds(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn monte_carlo(&self) -> MonteCarloConfig {
        MonteCarloConfig {
            runs: self.runs,
            seed: self.seed,
            nominal: self.nominal,
            noise: self.noise,
        }
    }

    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.monte_carlo().validate()?;
        if self.histogram_bins == 0 {
            return Err(InvalidInput::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if let Some(t) = self.thresholds_km.iter().find(|t| !t.is_finite()) {
            return Err(InvalidInput::Config(format!(
                "threshold {t} km is not finite"
            )));
        }
        Ok(())
    }
}
