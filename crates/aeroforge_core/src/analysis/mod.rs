//! Post-run analysis of Monte-Carlo results.
//!
//! `analyze` produces the `StatisticsSummary` for a finished run: location
//! and spread of the range distribution, the share of trials reaching the
//! 5,000 km and 10,000 km targets, and the Pearson correlation of every
//! sampled input with the range.
//!
//! ```ignore
//! use aeroforge_core::{analysis::analyze, simulation::run_montecarlo};
//!
//! let run = run_montecarlo(2000, 42)?;
//! let summary = analyze(&run.samples, &run.results)?;
//! for (field, r) in summary.correlations.ranked() {
//!     println!("{}: {r:.3}", field.key());
//! }
//! ```
//!
//! The `distribution` module derives chart data (histogram, CDF, quartile
//! box statistics, trend lines) from the same inputs.

mod correlation;
mod distribution;
mod statistics;

pub use correlation::*;
pub use distribution::*;
pub use statistics::*;

use crate::error::{InvalidInput, Result};
use crate::model::{ResultSet, SampleBatch, StatisticsSummary};

/// Summarize a run. Samples and results must describe the same trials.
pub fn analyze(samples: &SampleBatch, results: &ResultSet) -> Result<StatisticsSummary> {
    samples.validate()?;
    if samples.len() != results.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: samples.len(),
            actual: results.len(),
        });
    }

    let ranges = results.as_slice();
    let sorted_ranges = statistics::sorted(ranges);

    Ok(StatisticsSummary {
        mean: mean(ranges)?,
        std: std_dev(ranges)?,
        median: percentile_sorted(&sorted_ranges, 50.0)?,
        p5: percentile_sorted(&sorted_ranges, 5.0)?,
        p95: percentile_sorted(&sorted_ranges, 95.0)?,
        target_5k: achievement_rate(ranges, 5_000.0)?,
        target_10k: achievement_rate(ranges, 10_000.0)?,
        correlations: correlations(samples, results)?,
    })
}
