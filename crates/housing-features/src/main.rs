//! CLI entry point for the housing feature pipeline.
//!
//! With no arguments, cleans `data/raw/{train,test}.csv` under the project
//! root into `data/processed/{train,test}.parquet`.

use anyhow::{Result, anyhow};
use clap::Parser;
use housing_features::{FeaturePipeline, ProjectPaths, ReportGenerator, RunSummary};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Feature engineering for the housing-price dataset",
    long_about = "Cleans the raw housing CSVs and writes Parquet files.\n\n\
                  Reads <root>/data/raw/train.csv and test.csv, imputes missing values,\n\
                  encodes quality ratings, derives features, and writes\n\
                  <root>/data/processed/train.parquet and test.parquet.\n\n\
                  EXAMPLES:\n  \
                  # Default project layout\n  \
                  housing-features\n\n  \
                  # Another project root, with a JSON run report\n  \
                  housing-features --root /srv/housing --emit-report"
)]
struct Args {
    /// Project root containing data/raw
    ///
    /// Defaults to the directory the crate was built from
    #[arg(long)]
    root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the final result)
    #[arg(short, long)]
    quiet: bool,

    /// Write cleaning_report.json to the processed directory
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet);

    let paths = match &args.root {
        Some(root) => ProjectPaths::from_root(root),
        None => ProjectPaths::default(),
    };
    info!("Project root: {}", paths.root.display());

    let pipeline = FeaturePipeline::new(paths);
    let summary = match pipeline.run() {
        Ok(summary) => summary,
        Err(e) => {
            error!(code = e.error_code(), "Pipeline failed: {}", e);
            return Err(anyhow!("Pipeline failed: {}", e));
        }
    };

    if args.emit_report {
        let generator = ReportGenerator::new(&pipeline.paths().processed);
        let report_path = generator.write_report(&summary)?;
        info!("Report written to: {}", report_path.display());
    }

    print_completion(&summary);
    Ok(())
}

/// Print the confirmation line naming the written files.
///
/// Uses `println!` so the line is visible regardless of log level.
fn print_completion(summary: &RunSummary) {
    let outputs: Vec<String> = summary
        .output_paths()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    println!("Wrote: {}", outputs.join(" and "));
}
