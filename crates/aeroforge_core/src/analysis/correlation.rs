//! Pearson correlation of sampled inputs with the range

use std::collections::BTreeMap;

use crate::error::{InvalidInput, Result};
use crate::model::{Correlations, ResultSet, SampleBatch, StochasticField};

/// True when every value equals the first (or there are none). The centered
/// sum of squares of a constant sequence can be rounding residue, not zero.
pub(crate) fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// Centered sum of squares and cross products of two aligned sequences
fn co_moments(x: &[f64], y: &[f64]) -> (f64, f64, f64) {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    x.iter()
        .zip(y)
        .fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&xi, &yi)| {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
        })
}

/// Pearson coefficient of `x` with `y`.
///
/// `field` names `x` in the error when it has zero variance.
pub fn pearson_for(field: StochasticField, x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: y.len(),
            actual: x.len(),
        });
    }
    if x.is_empty() {
        return Err(InvalidInput::EmptyResults);
    }

    if is_constant(x) {
        return Err(InvalidInput::DegenerateField(field));
    }
    if is_constant(y) {
        return Err(InvalidInput::DegenerateResults);
    }

    let (sxx, syy, sxy) = co_moments(x, y);
    if sxx == 0.0 {
        return Err(InvalidInput::DegenerateField(field));
    }
    if syy == 0.0 {
        return Err(InvalidInput::DegenerateResults);
    }

    // Rounding can push |r| a hair past 1
    Ok((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}

/// Correlation of every stochastic field with the results.
///
/// Fails on the first field whose samples are constant.
pub fn correlations(samples: &SampleBatch, results: &ResultSet) -> Result<Correlations> {
    let y = results.as_slice();
    let mut values = BTreeMap::new();
    for field in StochasticField::ALL {
        values.insert(field, pearson_for(field, samples.field(field), y)?);
    }
    Ok(Correlations::new(values))
}
