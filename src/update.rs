//! Shipping-mode selector: re-aggregates the trend line and the heatmap

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{daily_trend, filter_by_mode, DailyCount, DayHourMatrix};
use crate::charts::{day_hour_heatmap, daily_line, Figure};
use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct ModeUpdate {
    pub trend: Vec<DailyCount>,
    pub matrix: DayHourMatrix,
}

/// The two figures that replace the selector-driven chart slots
#[derive(Debug, Clone, Serialize)]
pub struct ModeCharts {
    pub mode: String,
    pub shipments: usize,
    pub line: Figure,
    pub heatmap: Figure,
}

/// An unknown mode is not an error: it yields an empty series and an
/// all-empty matrix.
pub fn update(selected_mode: &str, dataset: &Dataset) -> ModeUpdate {
    let subset = filter_by_mode(dataset.shipments(), selected_mode);
    debug!("Mode '{}' selects {} shipments", selected_mode, subset.len());

    ModeUpdate {
        trend: daily_trend(&subset),
        matrix: DayHourMatrix::from_records(&subset),
    }
}

pub fn render(selected_mode: &str, update: &ModeUpdate) -> ModeCharts {
    ModeCharts {
        mode: selected_mode.to_string(),
        shipments: update.matrix.total() as usize,
        line: daily_line(&update.trend),
        heatmap: day_hour_heatmap(&update.matrix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn scenario_dataset() -> Dataset {
        Dataset::new(fixtures::scenario(), fixtures::boundaries())
    }

    #[test]
    fn test_express_scenario() {
        let result = update("EXPRESS", &scenario_dataset());
        assert_eq!(result.trend.len(), 1);
        assert_eq!(result.trend[0].count, 1);
        assert_eq!(result.matrix.populated_cells(), 1);
        assert_eq!(result.matrix.total(), 1);
    }

    #[test]
    fn test_unknown_mode_is_empty() {
        let result = update("DRONE", &scenario_dataset());
        assert!(result.trend.is_empty());
        assert_eq!(result.matrix, DayHourMatrix::empty());
        assert_eq!(result.matrix.rows().count(), 7);
    }

    #[test]
    fn test_render_replaces_two_figures() {
        let dataset = fixtures::dataset();
        let charts = render("STANDARD", &update("STANDARD", &dataset));
        assert_eq!(charts.mode, "STANDARD");
        assert_eq!(charts.shipments, 2);
        assert_eq!(charts.line.data[0]["type"], "scatter");
        assert_eq!(charts.heatmap.data[0]["type"], "heatmap");
    }

    #[test]
    fn test_update_is_repeatable() {
        let dataset = fixtures::dataset();
        assert_eq!(update("STANDARD", &dataset), update("STANDARD", &dataset));
        assert_eq!(dataset.shipments().len(), 4);
    }
}
