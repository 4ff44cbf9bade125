//! Dashboard server
//!
//! Usage:
//!   ./target/release/cod_dashboard [--shipments PATH] [--boundaries PATH]
//!                                  [--feature-key KEY] [--default-mode MODE]
//!                                  [--host HOST] [--port PORT]
//!
//! Endpoints:
//!   GET /                        - Dashboard page
//!   GET /api/v1/health           - Health check
//!   GET /api/v1/summary          - Summary cards
//!   GET /api/v1/modes            - Shipping modes for the selector
//!   GET /api/v1/charts/map       - Province choropleth
//!   GET /api/v1/charts/donut     - Shipping mode donut
//!   GET /api/v1/charts/mode?mode - Daily trend + weekday/hour heatmap

use anyhow::{Context, Result};
use clap::Parser;
use cod_dashboard::{
    api::{create_router, DashboardService},
    config::Config,
    dataset::Dataset,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_banner(config: &Config) {
    println!("============================================================");
    println!("              COD SHIPPING DASHBOARD");
    println!("============================================================");
    println!();
    println!("  Page:     http://localhost:{}/", config.port);
    println!("  API:      http://localhost:{}/api/v1/", config.port);
    println!("  Mode:     {} (default)", config.default_mode);
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let config = Config::parse();

    // Nothing can be shown without both inputs
    let dataset = Dataset::load(&config.shipments, &config.boundaries, &config.feature_key)
        .context("failed to load dashboard data")?;

    let service = Arc::new(DashboardService::new(Arc::new(dataset), &config.default_mode));
    let app = create_router(service);

    let addr = config.addr()?;
    print_banner(&config);
    tracing::info!("Starting dashboard server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
