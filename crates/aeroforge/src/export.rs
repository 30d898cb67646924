//! Writing run artifacts to disk
//!
//! The per-trial table goes to CSV and the summary and chart data to JSON.
//! Files are written atomically so a reader never sees a partial file.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use aeroforge_core::model::MonteCarloRun;
use serde::Serialize;

use crate::error::CliError;

pub const RESULTS_CSV: &str = "aeroforge_results.csv";
pub const SUMMARY_JSON: &str = "aeroforge_summary.json";
pub const CHARTS_JSON: &str = "aeroforge_charts.json";

const CSV_HEADER: &str =
    "run,eta_system,epack_wh_per_kg,l_over_d,harvest_kw,sic_efficiency_gain,range_km";

/// Write content to a file using write-then-rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Per-trial table, one row per run numbered from 1
pub fn results_csv(run: &MonteCarloRun) -> Result<String, CliError> {
    run.validate()?;

    let mut out = String::with_capacity(64 * (run.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    let rows = run.samples.trials(&run.nominal).zip(run.results.as_slice());
    for (i, (p, km)) in rows.enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            i + 1,
            p.eta_system,
            p.epack_wh_per_kg,
            p.l_over_d,
            p.harvest_kw,
            p.sic_efficiency_gain,
            km
        );
    }
    Ok(out)
}

pub fn write_results_csv(path: &Path, run: &MonteCarloRun) -> Result<(), CliError> {
    atomic_write(path, results_csv(run)?.as_bytes())
        .map_err(|e| CliError::Io(format!("failed to write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), rows = run.len(), "wrote results table");
    Ok(())
}

/// Pretty-printed JSON of any serializable record
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Serialize(format!("failed to serialize {}: {e}", path.display())))?;
    atomic_write(path, json.as_bytes())
        .map_err(|e| CliError::Io(format!("failed to write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "wrote JSON");
    Ok(())
}

/// Paths of the files written for one run
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub results_csv: PathBuf,
    pub summary_json: PathBuf,
    pub charts_json: PathBuf,
}

impl ExportPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            results_csv: dir.join(RESULTS_CSV),
            summary_json: dir.join(SUMMARY_JSON),
            charts_json: dir.join(CHARTS_JSON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroforge_core::analysis::analyze;
    use aeroforge_core::model::StatisticsSummary;
    use aeroforge_core::{InvalidInput, run_montecarlo};
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("out.csv.tmp").exists());
    }

    #[test]
    fn test_results_csv_layout() {
        let run = run_montecarlo(3, 42).unwrap();
        let csv = results_csv(&run).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[3].starts_with("3,"));

        // Values parse back to the exact samples
        let cols: Vec<f64> = lines[2].split(',').map(|c| c.parse().unwrap()).collect();
        assert_eq!(cols.len(), 7);
        assert_eq!(cols[1], run.samples.eta[1]);
        assert_eq!(cols[2], run.samples.epack[1]);
        assert_eq!(cols[6], run.results.as_slice()[1]);
    }

    #[test]
    fn test_results_csv_rejects_misaligned_run() {
        let mut run = run_montecarlo(3, 42).unwrap();
        run.samples.harvest.pop();
        assert!(matches!(
            results_csv(&run),
            Err(CliError::Analysis(InvalidInput::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_write_summary_json() {
        let dir = tempdir().unwrap();
        let paths = ExportPaths::in_dir(dir.path());
        let run = run_montecarlo(200, 42).unwrap();
        let summary = analyze(&run.samples, &run.results).unwrap();

        write_json(&paths.summary_json, &summary).unwrap();
        write_results_csv(&paths.results_csv, &run).unwrap();

        let content = fs::read_to_string(&paths.summary_json).unwrap();
        let parsed: StatisticsSummary = serde_json::from_str(&content).unwrap();
        for (field, r) in summary.correlations.iter() {
            let back = parsed.correlations.get(field).unwrap();
            assert!((back - r).abs() < 1e-12);
        }
        assert!(content.contains("\"epack\""));
        assert!(paths.results_csv.exists());
    }
}
