use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};
use votetally::{
    config::{DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR},
    ConfigBuilder, ReportProcessor,
};

/// Tally legislator and bill support/oppose counts from legislative vote data
#[derive(Parser, Debug)]
#[command(name = "votetally")]
#[command(version)]
struct Args {
    /// Directory holding legislators.csv, bills.csv, votes.csv and vote_results.csv
    #[arg(default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Where to write the reports (default: $VOTETALLY_OUTPUT_DIR, then /app/output)
    #[arg(long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Run the two reports concurrently
    #[arg(long)]
    parallel: bool,
}

fn output_dir(flag: Option<PathBuf>) -> PathBuf {
    // flag, then env, then default
    flag.or_else(|| std::env::var_os("VOTETALLY_OUTPUT_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) configure dirs ───────────────────────────────────────────
    let args = Args::parse();
    let config = ConfigBuilder::new()
        .data_dir(args.data_dir)
        .output_dir(output_dir(args.output_dir))
        .parallel(args.parallel)
        .build()?;

    // ─── 3) run both reports ─────────────────────────────────────────
    let processor = ReportProcessor::new(config)?;
    if let Err(e) = processor.run() {
        error!("processing failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
