//! Shared state behind the HTTP handlers.
//!
//! The static panels (cards, map, donut) are built once from the full
//! dataset; the selector-driven charts are recomputed on every call.

use std::sync::Arc;
use tracing::{info, warn};

use crate::aggregate::{count_by_mode, count_by_province, distinct_modes};
use crate::charts::{mode_donut, province_map, Figure, MapChart};
use crate::dataset::Dataset;
use crate::stats::{Card, SummaryStats};
use crate::update::{render, update, ModeCharts};

pub struct DashboardService {
    dataset: Arc<Dataset>,
    default_mode: String,
    modes: Vec<String>,
    summary: SummaryStats,
    map: MapChart,
    donut: Figure,
}

impl DashboardService {
    pub fn new(dataset: Arc<Dataset>, default_mode: &str) -> Self {
        let shipments = dataset.shipments();

        let summary = SummaryStats::compute(shipments);
        let map = province_map(&count_by_province(shipments), dataset.boundaries());
        let donut = mode_donut(&count_by_mode(shipments));
        let modes = distinct_modes(shipments);

        if !modes.iter().any(|m| m == default_mode) {
            warn!(
                "Default mode '{}' not present in data; its charts will be empty",
                default_mode
            );
        }
        info!(
            "Dashboard ready: {} shipments, {} modes, {} provinces off the map",
            summary.total_count,
            modes.len(),
            map.unmatched.len()
        );

        Self {
            dataset,
            default_mode: default_mode.to_string(),
            modes,
            summary,
            map,
            donut,
        }
    }

    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    pub fn cards(&self) -> Vec<Card> {
        self.summary.cards()
    }

    pub fn modes(&self) -> &[String] {
        &self.modes
    }

    pub fn default_mode(&self) -> &str {
        &self.default_mode
    }

    pub fn map(&self) -> &MapChart {
        &self.map
    }

    pub fn donut(&self) -> &Figure {
        &self.donut
    }

    /// Line and heatmap for `mode`, or for the default mode when `None`
    pub fn mode_charts(&self, mode: Option<&str>) -> ModeCharts {
        let mode = mode.unwrap_or(&self.default_mode);
        render(mode, &update(mode, &self.dataset))
    }
}
