//! Chart builders.
//!
//! Each builder takes an aggregated table and returns a Plotly figure
//! description (`data` traces plus `layout`) that the page hands straight
//! to `Plotly.react`. Builders are pure and know nothing about HTTP.

use geojson::{Feature, FeatureCollection};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::aggregate::{DailyCount, DayHourMatrix, GroupCount};
use crate::dataset::Boundaries;

pub const PAXEL_PALETTE: [&str; 5] = ["#ffc107", "#fd7e14", "#dc3545", "#e83e8c", "#6f42c1"];
pub const DONUT_COLORS: [&str; 3] = ["#ffc107", "#e83e8c", "#6f42c1"];
pub const LINE_COLOR: &str = "#6f42c1";

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// Evenly spaced continuous colour scale over `colors`
fn colorscale(colors: &[&str]) -> Value {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    Value::Array(
        colors
            .iter()
            .enumerate()
            .map(|(i, c)| json!([i as f64 / last, c]))
            .collect(),
    )
}

fn base_layout(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "paper_bgcolor": "#ffffff",
        "plot_bgcolor": "#ffffff",
        "font": { "color": "#2a3f5f" },
        "margin": { "l": 40, "r": 20, "t": 60, "b": 40 },
    })
}

fn set(layout: &mut Value, key: &str, value: Value) {
    if let Value::Object(map) = layout {
        map.insert(key.to_string(), value);
    }
}

// ============================================================================
// Map
// ============================================================================

/// Lon/lat bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Extent {
    fn include(extent: &mut Option<Extent>, lon: f64, lat: f64) {
        let e = extent.get_or_insert(Extent {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        });
        e.min_lon = e.min_lon.min(lon);
        e.min_lat = e.min_lat.min(lat);
        e.max_lon = e.max_lon.max(lon);
        e.max_lat = e.max_lat.max(lat);
    }
}

fn visit_positions<F: FnMut(&[f64])>(value: &geojson::Value, f: &mut F) {
    use geojson::Value as G;
    match value {
        G::Point(p) => f(&p[..]),
        G::MultiPoint(ps) | G::LineString(ps) => ps.iter().for_each(|p| f(&p[..])),
        G::MultiLineString(lines) | G::Polygon(lines) => {
            lines.iter().flatten().for_each(|p| f(&p[..]))
        }
        G::MultiPolygon(polys) => polys.iter().flatten().flatten().for_each(|p| f(&p[..])),
        G::GeometryCollection(geoms) => {
            for g in geoms {
                visit_positions(&g.value, f);
            }
        }
    }
}

/// Bounding box of every position in `features`
pub fn extent(features: &[Feature]) -> Option<Extent> {
    let mut ext = None;
    for geometry in features.iter().filter_map(|f| f.geometry.as_ref()) {
        visit_positions(&geometry.value, &mut |pos: &[f64]| {
            if let [lon, lat, ..] = pos {
                Extent::include(&mut ext, *lon, *lat);
            }
        });
    }
    ext
}

#[derive(Debug, Clone, Serialize)]
pub struct MapChart {
    pub figure: Figure,
    /// Provinces with shipments but no boundary; left off the map
    pub unmatched: Vec<String>,
    pub extent: Option<Extent>,
}

pub fn province_map(counts: &[GroupCount<String>], boundaries: &Boundaries) -> MapChart {
    let (matched, unmatched): (Vec<&GroupCount<String>>, Vec<&GroupCount<String>>) =
        counts.iter().partition(|g| boundaries.contains(&g.key));

    for g in &unmatched {
        warn!(
            "Province '{}' ({} shipments) has no boundary; dropped from the map",
            g.key, g.count
        );
    }

    let features: Vec<Feature> = matched
        .iter()
        .filter_map(|g| boundaries.get(&g.key).cloned())
        .collect();
    let extent = extent(&features);

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    let trace = json!({
        "type": "choropleth",
        "geojson": collection,
        "featureidkey": boundaries.feature_id_key(),
        "locations": matched.iter().map(|g| g.key.as_str()).collect::<Vec<_>>(),
        "z": matched.iter().map(|g| g.count).collect::<Vec<_>>(),
        "colorscale": colorscale(&PAXEL_PALETTE),
        "colorbar": { "title": { "text": "Orders" } },
        "hovertemplate": "<b>%{location}</b><br>Orders: %{z}<extra></extra>",
    });

    let mut geo = json!({
        "fitbounds": "locations",
        "visible": false,
        "projection": { "type": "equirectangular" },
    });
    if let Some(e) = extent {
        set(&mut geo, "lonaxis", json!({ "range": [e.min_lon, e.max_lon] }));
        set(&mut geo, "lataxis", json!({ "range": [e.min_lat, e.max_lat] }));
    }

    let mut layout = base_layout("Shipments to Every Province");
    set(&mut layout, "geo", geo);

    MapChart {
        figure: Figure {
            data: vec![trace],
            layout,
        },
        unmatched: unmatched.iter().map(|g| g.key.clone()).collect(),
        extent,
    }
}

// ============================================================================
// Donut
// ============================================================================

pub fn mode_donut(counts: &[GroupCount<String>]) -> Figure {
    let trace = json!({
        "type": "pie",
        "labels": counts.iter().map(|g| g.key.as_str()).collect::<Vec<_>>(),
        "values": counts.iter().map(|g| g.count).collect::<Vec<_>>(),
        "hole": 0.4,
        "marker": { "colors": DONUT_COLORS },
        "hovertemplate": "Shipping Mode: %{label}<br>Shipments: %{value}<extra></extra>",
    });

    let mut layout = base_layout("Shipments per Shipping Mode");
    set(&mut layout, "legend", json!({ "title": { "text": "Shipping Mode" } }));

    Figure {
        data: vec![trace],
        layout,
    }
}

// ============================================================================
// Reactive charts
// ============================================================================

pub fn daily_line(series: &[DailyCount]) -> Figure {
    let trace = json!({
        "type": "scatter",
        "mode": "lines",
        "x": series.iter().map(|d| d.date.format("%Y-%m-%d").to_string()).collect::<Vec<_>>(),
        "y": series.iter().map(|d| d.count).collect::<Vec<_>>(),
        "line": { "color": LINE_COLOR },
        "hovertemplate": "%{x}<br>Shipments: %{y}<extra></extra>",
    });

    let mut layout = base_layout("Daily Shipment Movement");
    set(&mut layout, "xaxis", json!({ "title": { "text": "" } }));
    set(&mut layout, "yaxis", json!({ "title": { "text": "Shipments" } }));

    Figure {
        data: vec![trace],
        layout,
    }
}

/// Rows are always Monday..Sunday, top to bottom. Columns are the hours
/// seen in the matrix; empty cells become `null`.
pub fn day_hour_heatmap(matrix: &DayHourMatrix) -> Figure {
    let hours = matrix.observed_hours();
    let rows = matrix.project(&hours);

    let trace = json!({
        "type": "heatmap",
        "x": hours,
        "y": rows.iter().map(|(day, _)| *day).collect::<Vec<_>>(),
        "z": rows.iter().map(|(_, cells)| cells.clone()).collect::<Vec<_>>(),
        "colorscale": colorscale(&PAXEL_PALETTE),
        "hoverongaps": false,
        "hovertemplate": "%{y} %{x}:00<br>Shipments: %{z}<extra></extra>",
    });

    let mut layout = base_layout("Daily Shipment Count");
    set(
        &mut layout,
        "xaxis",
        json!({ "title": { "text": "Order Hour" }, "dtick": 1 }),
    );
    set(
        &mut layout,
        "yaxis",
        json!({ "title": { "text": "Order Day" }, "autorange": "reversed" }),
    );

    Figure {
        data: vec![trace],
        layout,
    }
}
