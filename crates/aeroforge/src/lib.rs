//! Command-line front end for the AeroForge range uncertainty engine
//!
//! Loads an analysis configuration, runs the Monte-Carlo engine, prints the
//! summary and writes the per-trial table, summary and chart data to disk.

pub mod error;
pub mod export;
pub mod logging;
pub mod report;
pub mod scenario;

use std::path::Path;

use aeroforge_core::analysis::{achievement_rates, analyze, chart_data};
use aeroforge_core::model::{AchievementRate, MonteCarloRun, StatisticsSummary};
use aeroforge_core::{AnalysisConfig, simulate};

pub use error::CliError;
pub use export::ExportPaths;
pub use logging::init_logging;

/// Everything produced by one analysis
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub run: MonteCarloRun,
    pub summary: StatisticsSummary,
    pub achievement: Vec<AchievementRate>,
}

/// Run the engine and summarize the results
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisOutput, CliError> {
    config.validate()?;
    tracing::info!(runs = config.runs, seed = config.seed, "running Monte-Carlo analysis");

    let run = simulate(&config.monte_carlo())?;
    let summary = analyze(&run.samples, &run.results)?;
    let achievement = achievement_rates(run.results.as_slice(), &config.thresholds_km)?;

    tracing::info!(
        mean_km = summary.mean,
        std_km = summary.std,
        "analysis complete"
    );
    Ok(AnalysisOutput {
        run,
        summary,
        achievement,
    })
}

/// Write the CSV table, summary JSON and chart data JSON into `dir`.
///
/// Chart data is computed before anything is written, so a run whose charts
/// cannot be built leaves the directory untouched.
pub fn export_all(
    dir: &Path,
    output: &AnalysisOutput,
    histogram_bins: usize,
) -> Result<ExportPaths, CliError> {
    let charts = chart_data(&output.run.samples, &output.run.results, histogram_bins)?;
    output.run.validate()?;

    std::fs::create_dir_all(dir)
        .map_err(|e| CliError::Io(format!("failed to create {}: {e}", dir.display())))?;

    let paths = ExportPaths::in_dir(dir);
    export::write_results_csv(&paths.results_csv, &output.run)?;
    export::write_json(&paths.summary_json, &output.summary)?;
    export::write_json(&paths.charts_json, &charts)?;
    Ok(paths)
}
