use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use prediction_rank::{load_predictions, materialize, rank, RankConfig};

/// Command-line arguments for prediction-rank
#[derive(Parser, Debug)]
#[command(name = "prediction-rank")]
#[command(about = "Rank diagnostic prediction instances by medical priority")]
#[command(version)]
struct Args {
    /// Input root containing one subdirectory per prediction instance
    input_dir: PathBuf,

    /// Output root receiving the ranking manifest and rank-prefixed copies
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir)
            .with_context(|| format!("Failed to create output directory {}", args.output_dir.display()))?;
    }

    let config = RankConfig::default();
    let start = Instant::now();

    info!("Loading prediction records from: {}", args.input_dir.display());
    let records = load_predictions(&args.input_dir, &config)?;

    let ranked = rank(records);

    materialize(&ranked, &args.input_dir, &args.output_dir, &config)?;
    info!(
        "Ranked {} instances into {} in {:?}",
        ranked.len(),
        args.output_dir.display(),
        start.elapsed()
    );

    Ok(())
}
