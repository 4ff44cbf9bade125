//! Synthetic data generator for the COD shipping dashboard
//!
//! Writes a cleaned shipment CSV the dashboard can load directly.
//!
//! Usage:
//!   cargo run --release --bin generate_synthetic -- [OPTIONS]
//!
//! Options:
//!   --count <N>       Number of orders (default: 20000)
//!   --start <DATE>    First creation date, YYYY-MM-DD (default: 2023-01-01)
//!   --days <N>        Days covered (default: 90)
//!   --seed <N>        Random seed for reproducibility (optional)
//!   --output <PATH>   Output CSV path (default: data_input/shipping_clean.csv)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use cod_dashboard::synthetic::SyntheticGenerator;
use csv::WriterBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

/// Synthetic data generator for the shipping dashboard
#[derive(Parser, Debug)]
#[command(name = "generate_synthetic")]
#[command(about = "Generate a synthetic cleaned shipment CSV")]
struct Args {
    /// Number of orders to generate
    #[arg(long, default_value = "20000")]
    count: usize,

    /// First creation date
    #[arg(long, default_value = "2023-01-01")]
    start: NaiveDate,

    /// Number of days the orders are spread over
    #[arg(long, default_value = "90")]
    days: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path
    #[arg(long, default_value = "data_input/shipping_clean.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = SyntheticGenerator::new(args.start, args.days)?;
    let records = generator.generate(args.count, &mut rng);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {:?}", parent))?;
    }

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(&args.output)
        .with_context(|| format!("cannot write {:?}", args.output))?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} orders over {} days from {} to {:?}",
        records.len(),
        args.days,
        args.start,
        args.output
    );

    Ok(())
}
