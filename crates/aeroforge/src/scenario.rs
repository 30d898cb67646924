//! Loading and saving analysis configurations as YAML

use std::fs;
use std::path::Path;

use aeroforge_core::AnalysisConfig;

use crate::error::CliError;

pub fn from_yaml(yaml: &str) -> Result<AnalysisConfig, CliError> {
    serde_saphyr::from_str(yaml).map_err(|e| CliError::Parse(format!("invalid config: {e}")))
}

pub fn to_yaml(config: &AnalysisConfig) -> Result<String, CliError> {
    serde_saphyr::to_string(config)
        .map_err(|e| CliError::Serialize(format!("failed to serialize config: {e}")))
}

/// Read a configuration file; a missing path yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, CliError> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("failed to read {}: {e}", path.display())))?;
    let config = from_yaml(&content)?;
    tracing::info!(path = %path.display(), runs = config.runs, seed = config.seed, "loaded config");
    Ok(config)
}

/// Apply command-line overrides, then validate the result
pub fn resolve(
    mut config: AnalysisConfig,
    runs: Option<usize>,
    seed: Option<u64>,
) -> Result<AnalysisConfig, CliError> {
    if let Some(runs) = runs {
        config = config.with_runs(runs);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}
