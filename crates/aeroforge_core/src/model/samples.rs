//! Sampled inputs and range outputs of a Monte-Carlo run
//!
//! Index `i` in every sequence of a `SampleBatch` and in the `ResultSet`
//! refers to the same trial.

use serde::{Deserialize, Serialize};

use super::params::{ParameterSet, StochasticField};
use crate::error::{InvalidInput, Result};

/// Sampled values of every stochastic field, index-aligned by trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBatch {
    pub epack: Vec<f64>,
    pub l_over_d: Vec<f64>,
    pub harvest: Vec<f64>,
    pub sic_gain: Vec<f64>,
    pub eta: Vec<f64>,
}

impl SampleBatch {
    /// Build a batch from per-field sequences, which must share one length.
    pub fn new(
        epack: Vec<f64>,
        l_over_d: Vec<f64>,
        harvest: Vec<f64>,
        sic_gain: Vec<f64>,
        eta: Vec<f64>,
    ) -> Result<Self> {
        let batch = Self {
            epack,
            l_over_d,
            harvest,
            sic_gain,
            eta,
        };
        batch.validate()?;
        Ok(batch)
    }

    /// Check that every field holds the same number of trials
    pub fn validate(&self) -> Result<()> {
        let expected = self.epack.len();
        for field in StochasticField::ALL {
            let actual = self.field(field).len();
            if actual != expected {
                return Err(InvalidInput::LengthMismatch { expected, actual });
            }
        }
        Ok(())
    }

    /// Number of trials
    #[must_use]
    pub fn len(&self) -> usize {
        self.epack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.epack.is_empty()
    }

    #[must_use]
    pub fn field(&self, field: StochasticField) -> &[f64] {
        match field {
            StochasticField::PackSpecificEnergy => &self.epack,
            StochasticField::LiftToDrag => &self.l_over_d,
            StochasticField::HarvestPower => &self.harvest,
            StochasticField::SicEfficiencyGain => &self.sic_gain,
            StochasticField::SystemEfficiency => &self.eta,
        }
    }

    pub(crate) fn field_mut(&mut self, field: StochasticField) -> &mut Vec<f64> {
        match field {
            StochasticField::PackSpecificEnergy => &mut self.epack,
            StochasticField::LiftToDrag => &mut self.l_over_d,
            StochasticField::HarvestPower => &mut self.harvest,
            StochasticField::SicEfficiencyGain => &mut self.sic_gain,
            StochasticField::SystemEfficiency => &mut self.eta,
        }
    }

    /// Inputs of trial `index`: `nominal` with every stochastic field
    /// replaced by its sample. Returns `None` when any field has no value at
    /// `index`.
    #[must_use]
    pub fn trial(&self, index: usize, nominal: &ParameterSet) -> Option<ParameterSet> {
        Some(ParameterSet {
            epack_wh_per_kg: *self.epack.get(index)?,
            l_over_d: *self.l_over_d.get(index)?,
            harvest_kw: *self.harvest.get(index)?,
            sic_efficiency_gain: *self.sic_gain.get(index)?,
            eta_system: *self.eta.get(index)?,
            ..*nominal
        })
    }

    /// Every trial's full parameter set in index order. Stops at the
    /// shortest field.
    pub fn trials<'a>(
        &'a self,
        nominal: &'a ParameterSet,
    ) -> impl Iterator<Item = ParameterSet> + 'a {
        (0..self.len()).map_while(move |i| self.trial(i, nominal))
    }

    /// Number of trials where `eta * sic_gain` exceeds 1.0
    #[must_use]
    pub fn efficiency_above_unity(&self) -> usize {
        self.eta
            .iter()
            .zip(&self.sic_gain)
            .filter(|&(&eta, &gain)| eta * gain > 1.0)
            .count()
    }
}

/// Range of every trial in km, index-aligned with the `SampleBatch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    ranges_km: Vec<f64>,
}

impl ResultSet {
    #[must_use]
    pub fn new(ranges_km: Vec<f64>) -> Self {
        Self { ranges_km }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges_km.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges_km.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.ranges_km
    }
}

/// Everything a run produced: the samples, their ranges and the nominal set
/// the fixed fields came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloRun {
    pub samples: SampleBatch,
    pub results: ResultSet,
    pub nominal: ParameterSet,
}

impl MonteCarloRun {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Check the batch and that there is one result per trial
    pub fn validate(&self) -> Result<()> {
        self.samples.validate()?;
        if self.results.len() != self.samples.len() {
            return Err(InvalidInput::LengthMismatch {
                expected: self.samples.len(),
                actual: self.results.len(),
            });
        }
        Ok(())
    }

    /// Split into the `(samples, results, nominal)` triple
    #[must_use]
    pub fn into_parts(self) -> (SampleBatch, ResultSet, ParameterSet) {
        (self.samples, self.results, self.nominal)
    }
}
