//! Stochastic parameter sampler
//!
//! Draws `n` perturbed values for each stochastic field. Fields are drawn
//! one after another (all `n` draws of a field before the next field) in
//! `StochasticField::ALL` order, so a seeded generator always yields the
//! same batch.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{InvalidInput, Result};
use crate::model::{NoiseModel, ParameterSet, SampleBatch, StochasticField};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSampler {
    nominal: ParameterSet,
    noise: NoiseModel,
}

impl ParameterSampler {
    /// Create a sampler after validating both inputs
    pub fn new(nominal: ParameterSet, noise: NoiseModel) -> Result<Self> {
        nominal.validate()?;
        noise.validate()?;
        Ok(Self { nominal, noise })
    }

    /// Draw `n` samples of one field
    pub fn sample_field<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        field: StochasticField,
        n: usize,
    ) -> Vec<f64> {
        let nominal = self.nominal.get(field);
        let noise = self.noise.get(field);
        (0..n)
            .map(|_| {
                let z: f64 = StandardNormal.sample(rng);
                noise.apply(nominal, z)
            })
            .collect()
    }

    /// Draw a full batch of `n` trials.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<SampleBatch> {
        if n == 0 {
            return Err(InvalidInput::NoRuns);
        }

        let mut batch = SampleBatch {
            epack: Vec::new(),
            l_over_d: Vec::new(),
            harvest: Vec::new(),
            sic_gain: Vec::new(),
            eta: Vec::new(),
        };
        for field in StochasticField::ALL {
            *batch.field_mut(field) = self.sample_field(rng, field, n);
        }

        tracing::trace!(n, "sampled parameter batch");
        Ok(batch)
    }
}
