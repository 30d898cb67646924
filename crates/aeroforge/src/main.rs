use std::path::PathBuf;

use aeroforge::{export_all, init_logging, report, run_analysis, scenario};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "aeroforge")]
#[command(about = "Monte-Carlo range uncertainty analysis for battery-electric aircraft")]
struct Args {
    /// YAML analysis configuration (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of Monte-Carlo trials (overrides the config file)
    #[arg(short = 'n', long)]
    runs: Option<usize>,

    /// Random seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the CSV table and JSON artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip writing files
    #[arg(long)]
    no_export: bool,

    /// Print the summary as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as YAML and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let _log_guard = init_logging(&args.log_level, args.log_file.as_deref())?;

    if args.write_default_config {
        print!("{}", scenario::to_yaml(&Default::default())?);
        return Ok(());
    }

    let config = scenario::load_config(args.config.as_deref())?;
    let config = scenario::resolve(config, args.runs, args.seed)?;

    let output = run_analysis(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output.summary)?);
    } else {
        print!("{}", report::format_summary(&output.summary, config.runs));
        println!();
        print!("{}", report::format_achievement_table(&output.achievement));
    }

    if !args.no_export {
        let paths = export_all(&args.output_dir, &output, config.histogram_bins)?;
        tracing::info!(
            results = %paths.results_csv.display(),
            summary = %paths.summary_json.display(),
            charts = %paths.charts_json.display(),
            "artifacts written"
        );
    }

    Ok(())
}
