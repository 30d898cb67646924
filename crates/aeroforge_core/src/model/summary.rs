//! Summary records derived from a finished run

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::params::StochasticField;

/// Pearson correlation of each stochastic field with the range.
///
/// Stored in field order; `ranked` gives the sensitivity ordering without
/// changing the mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Correlations(BTreeMap<StochasticField, f64>);

impl Correlations {
    #[must_use]
    pub fn new(values: BTreeMap<StochasticField, f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn get(&self, field: StochasticField) -> Option<f64> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StochasticField, f64)> + '_ {
        self.0.iter().map(|(field, r)| (*field, *r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields by descending `|r|`. Ties keep field order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(StochasticField, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        ranked
    }
}

/// Share of trials reaching a range target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AchievementRate {
    pub threshold_km: f64,
    /// Percentage of trials with range >= `threshold_km` (0..=100)
    pub percent: f64,
}

/// Statistics of the range distribution of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    /// Population standard deviation (divides by n)
    pub std: f64,
    pub median: f64,
    pub p5: f64,
    pub p95: f64,
    /// Percent of trials reaching 5,000 km
    pub target_5k: f64,
    /// Percent of trials reaching 10,000 km
    pub target_10k: f64,
    pub correlations: Correlations,
}
