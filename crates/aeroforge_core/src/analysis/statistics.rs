//! Descriptive statistics of the range distribution

use crate::error::{InvalidInput, Result};
use crate::model::AchievementRate;

fn non_empty(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        Err(InvalidInput::EmptyResults)
    } else {
        Ok(())
    }
}

pub fn mean(values: &[f64]) -> Result<f64> {
    non_empty(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`)
pub fn std_dev(values: &[f64]) -> Result<f64> {
    let mu = mean(values)?;
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Sorted copy of `values`
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Percentile of already-sorted data, `p` in `[0, 100]`.
///
/// Linear interpolation between the two ranked values around position
/// `p / 100 * (n - 1)`.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    non_empty(sorted)?;
    if !(0.0..=100.0).contains(&p) {
        return Err(InvalidInput::Config(format!(
            "percentile {p} outside [0, 100]"
        )));
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    percentile_sorted(&sorted(values), p)
}

pub fn median(values: &[f64]) -> Result<f64> {
    percentile(values, 50.0)
}

/// Percentage of values at or above `threshold`
pub fn achievement_rate(values: &[f64], threshold: f64) -> Result<f64> {
    non_empty(values)?;
    let hits = values.iter().filter(|&&v| v >= threshold).count();
    Ok(hits as f64 / values.len() as f64 * 100.0)
}

/// Achievement rate for each threshold, in the order given
pub fn achievement_rates(values: &[f64], thresholds: &[f64]) -> Result<Vec<AchievementRate>> {
    thresholds
        .iter()
        .map(|&threshold_km| {
            Ok(AchievementRate {
                threshold_km,
                percent: achievement_rate(values, threshold_km)?,
            })
        })
        .collect()
}
