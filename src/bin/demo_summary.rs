//! Dashboard numbers in the terminal
//! Run: ./target/release/demo_summary [--mode MODE]

use anyhow::Result;
use clap::Parser;
use cod_dashboard::{
    aggregate::{count_by_mode, count_by_province, distinct_modes},
    dataset::Dataset,
    models::weekday_name,
    stats::SummaryStats,
    update::update,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "demo_summary")]
#[command(about = "Print the dashboard aggregations without starting the server")]
struct Args {
    #[arg(long, env = "COD_SHIPMENTS", default_value = "data_input/shipping_clean.csv")]
    shipments: PathBuf,

    #[arg(long, env = "COD_BOUNDARIES", default_value = "data_cache/Indonesia_provinces.geojson")]
    boundaries: PathBuf,

    #[arg(long, env = "COD_FEATURE_KEY", default_value = "NAME_1")]
    feature_key: String,

    /// Only show the trend and heatmap for this mode (default: every mode)
    #[arg(long)]
    mode: Option<String>,
}

fn print_section_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .init();

    let args = Args::parse();
    let dataset = Dataset::load(&args.shipments, &args.boundaries, &args.feature_key)?;
    let shipments = dataset.shipments();

    print_section_header("SUMMARY");
    for card in SummaryStats::compute(shipments).cards() {
        println!("  {:28} {:>14}", card.title, card.value);
    }

    print_section_header("SHIPMENTS BY PROVINCE");
    let mut provinces = count_by_province(shipments);
    provinces.sort_by(|a, b| b.count.cmp(&a.count));
    for g in &provinces {
        let marker = if dataset.boundaries().contains(&g.key) { "" } else { "  (no boundary)" };
        println!("  {:28} {:>8}{}", g.key, g.count, marker);
    }

    print_section_header("SHIPMENTS BY MODE");
    for g in count_by_mode(shipments) {
        println!("  {:28} {:>8}", g.key, g.count);
    }

    let modes = match args.mode {
        Some(mode) => vec![mode],
        None => distinct_modes(shipments),
    };

    for mode in modes {
        let result = update(&mode, &dataset);
        print_section_header(&format!("MODE {}", mode));

        println!("  Daily trend ({} days)", result.trend.len());
        for point in result.trend.iter().take(10) {
            println!("    {}  {:>6}", point.date, point.count);
        }
        if result.trend.len() > 10 {
            println!("    ... {} more", result.trend.len() - 10);
        }

        println!("\n  Orders by day and hour (. = no data)");
        print!("  {:10}", "");
        for hour in 0..24 {
            print!("{:>4}", hour);
        }
        println!();
        for (day, row) in result.matrix.rows() {
            print!("  {:10}", weekday_name(day));
            for cell in row {
                match cell {
                    Some(n) => print!("{:>4}", n),
                    None => print!("{:>4}", "."),
                }
            }
            println!();
        }
    }

    Ok(())
}
