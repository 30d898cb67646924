//! Data behind the standard range charts
//!
//! Histogram, cumulative distribution, range grouped by the quartile of an
//! input, and per-field trend lines. Plotting itself is left to consumers.

use serde::{Deserialize, Serialize};

use super::correlation::{correlations, is_constant};
use super::statistics::{percentile_sorted, sorted};
use crate::error::{InvalidInput, Result};
use crate::model::{ResultSet, SampleBatch, StochasticField};

/// Equal-width histogram over `[min, max]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin `values` into `bins` equal-width bins.
///
/// Every bin is half-open except the last, which also holds the maximum.
/// Constant data gets a unit-wide span centred on the value.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram> {
    if values.is_empty() {
        return Err(InvalidInput::EmptyResults);
    }
    if bins == 0 {
        return Err(InvalidInput::Config("histogram needs at least one bin".to_string()));
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram { edges, counts })
}

/// `(value, cumulative fraction)` with fractions `1/n, 2/n, ..., 1`
pub fn empirical_cdf(values: &[f64]) -> Vec<(f64, f64)> {
    let n = values.len() as f64;
    sorted(values)
        .into_iter()
        .enumerate()
        .map(|(i, v)| (v, (i + 1) as f64 / n))
        .collect()
}

/// Five-number summary of a group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub count: usize,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let s = sorted(values);
        Ok(Self {
            min: percentile_sorted(&s, 0.0)?,
            q1: percentile_sorted(&s, 25.0)?,
            median: percentile_sorted(&s, 50.0)?,
            q3: percentile_sorted(&s, 75.0)?,
            max: percentile_sorted(&s, 100.0)?,
            count: s.len(),
        })
    }
}

/// Ranges of the trials whose input fell in one quartile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuartileGroup {
    /// "Q1" to "Q4"
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    /// `None` when no trial landed in this quartile
    pub range_km: Option<BoxStats>,
}

/// Group results by the quartile of `field`'s samples.
///
/// Quartile edges come from linearly interpolated percentiles. Intervals are
/// `(lower, upper]`, except Q1 which also holds the minimum. Tied edges
/// (too few distinct samples) are rejected as a degenerate field.
pub fn quartile_groups(
    samples: &SampleBatch,
    results: &ResultSet,
    field: StochasticField,
) -> Result<Vec<QuartileGroup>> {
    let x = samples.field(field);
    let y = results.as_slice();
    if x.len() != y.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: y.len(),
            actual: x.len(),
        });
    }

    let sorted_x = sorted(x);
    let edges = [0.0, 25.0, 50.0, 75.0, 100.0]
        .map(|p| percentile_sorted(&sorted_x, p))
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    if edges.windows(2).any(|e| e[0] >= e[1]) {
        return Err(InvalidInput::DegenerateField(field));
    }

    let mut grouped: [Vec<f64>; 4] = Default::default();
    for (&xi, &yi) in x.iter().zip(y) {
        let q = edges[1..4].iter().position(|&upper| xi <= upper).unwrap_or(3);
        grouped[q].push(yi);
    }

    grouped
        .iter()
        .enumerate()
        .map(|(q, values)| {
            let range_km = if values.is_empty() {
                None
            } else {
                Some(BoxStats::from_values(values)?)
            };
            Ok(QuartileGroup {
                label: format!("Q{}", q + 1),
                lower: edges[q],
                upper: edges[q + 1],
                range_km,
            })
        })
        .collect()
}

/// Least-squares line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[inline]
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Degree-one least-squares fit. `None` when `x` is constant, the lengths
/// differ or the input is empty.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    if x.len() != y.len() || x.is_empty() || is_constant(x) {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (sxx, sxy) = x.iter().zip(y).fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
        let dx = xi - mean_x;
        (sxx + dx * dx, sxy + dx * (yi - mean_y))
    });
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Trend line of range against one field's samples
pub fn trend_line(
    samples: &SampleBatch,
    results: &ResultSet,
    field: StochasticField,
) -> Result<LinearFit> {
    let x = samples.field(field);
    if x.len() != results.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: results.len(),
            actual: x.len(),
        });
    }
    linear_fit(x, results.as_slice()).ok_or(InvalidInput::DegenerateField(field))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityEntry {
    pub field: StochasticField,
    /// Axis label for plots
    pub label: String,
    pub correlation: f64,
    pub trend: LinearFit,
}

/// Per-field sensitivity, strongest `|correlation|` first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub entries: Vec<SensitivityEntry>,
}

pub fn sensitivity_report(samples: &SampleBatch, results: &ResultSet) -> Result<SensitivityReport> {
    let correlations = correlations(samples, results)?;
    let entries = correlations
        .ranked()
        .into_iter()
        .map(|(field, correlation)| {
            Ok(SensitivityEntry {
                field,
                label: field.label().to_string(),
                correlation,
                trend: trend_line(samples, results, field)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(SensitivityReport { entries })
}

/// Everything needed to draw the standard chart set for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub histogram: Histogram,
    pub cdf: Vec<(f64, f64)>,
    /// Range by quartile of battery specific energy
    pub pack_energy_quartiles: Vec<QuartileGroup>,
    pub sensitivity: SensitivityReport,
}

pub fn chart_data(samples: &SampleBatch, results: &ResultSet, bins: usize) -> Result<ChartData> {
    Ok(ChartData {
        histogram: histogram(results.as_slice(), bins)?,
        cdf: empirical_cdf(results.as_slice()),
        pack_energy_quartiles: quartile_groups(
            samples,
            results,
            StochasticField::PackSpecificEnergy,
        )?,
        sensitivity: sensitivity_report(samples, results)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_everything() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let h = histogram(&values, 5).unwrap();

        assert_eq!(h.edges.len(), 6);
        assert_eq!(h.edges[0], 0.0);
        assert_eq!(h.edges[5], 10.0);
        // Last bin is closed: [8, 10]
        assert_eq!(h.counts, vec![2, 2, 2, 2, 3]);
        assert_eq!(h.total(), values.len());
    }

    #[test]
    fn test_histogram_constant_values() {
        let h = histogram(&[4.0, 4.0, 4.0], 2).unwrap();
        assert_eq!(h.edges, vec![3.5, 4.0, 4.5]);
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn test_histogram_rejects_bad_input() {
        assert_eq!(histogram(&[], 10), Err(InvalidInput::EmptyResults));
        assert!(histogram(&[1.0], 0).is_err());
    }

    #[test]
    fn test_empirical_cdf() {
        let cdf = empirical_cdf(&[3.0, 1.0, 2.0, 4.0]);
        assert_eq!(cdf, vec![(1.0, 0.25), (2.0, 0.5), (3.0, 0.75), (4.0, 1.0)]);
    }

    #[test]
    fn test_linear_fit() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [5.0, 7.0, 9.0, 11.0];
        let fit = linear_fit(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
        assert!((fit.at(10.0) - 23.0).abs() < 1e-12);

        assert!(linear_fit(&[1.0, 1.0], &[2.0, 3.0]).is_none());
        assert!(linear_fit(&[0.92; 4], &[1.0, 2.0, 3.0, 5.0]).is_none());
        assert!(linear_fit(&[0.1; 3], &[1.0, 2.0, 4.0]).is_none());
        assert!(linear_fit(&[], &[]).is_none());
    }

    #[test]
    fn test_quartile_groups_follow_field() {
        // epack rises with trial index, range mirrors it
        let n = 8;
        let epack: Vec<f64> = (0..n).map(|i| 300.0 + 50.0 * i as f64).collect();
        let ranges: Vec<f64> = (0..n).map(|i| 1.0 + i as f64).collect();
        let samples = SampleBatch::new(
            epack,
            vec![22.0; n],
            vec![15.0; n],
            vec![1.08; n],
            vec![0.92; n],
        )
        .unwrap();
        let results = ResultSet::new(ranges);

        let groups =
            quartile_groups(&samples, &results, StochasticField::PackSpecificEnergy).unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].label, "Q1");
        let counts: Vec<usize> = groups
            .iter()
            .map(|g| g.range_km.map_or(0, |b| b.count))
            .collect();
        assert_eq!(counts, vec![2, 2, 2, 2]);
        assert_eq!(groups[0].range_km.unwrap().min, 1.0);
        assert_eq!(groups[3].range_km.unwrap().max, 8.0);

        assert_eq!(
            quartile_groups(&samples, &results, StochasticField::LiftToDrag),
            Err(InvalidInput::DegenerateField(StochasticField::LiftToDrag))
        );
    }
}
