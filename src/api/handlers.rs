//! REST handlers for the dashboard

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::page::render_page;
use super::service::DashboardService;
use crate::charts::{Figure, MapChart};
use crate::stats::{Card, SummaryStats};
use crate::update::ModeCharts;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct SummaryResponse {
    pub stats: SummaryStats,
    pub cards: Vec<Card>,
}

#[derive(Serialize)]
pub struct ModesResponse {
    pub modes: Vec<String>,
    pub default_mode: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct ModeQuery {
    pub mode: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<DashboardService>;

/// GET /
pub async fn index(State(service): State<AppState>) -> Html<String> {
    Html(render_page(
        &service.cards(),
        service.modes(),
        service.default_mode(),
    ))
}

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/summary
pub async fn get_summary(State(service): State<AppState>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        stats: service.summary().clone(),
        cards: service.cards(),
    })
}

/// GET /api/v1/modes
pub async fn get_modes(State(service): State<AppState>) -> Json<ModesResponse> {
    Json(ModesResponse {
        modes: service.modes().to_vec(),
        default_mode: service.default_mode().to_string(),
    })
}

/// GET /api/v1/charts/map
pub async fn get_map(State(service): State<AppState>) -> Json<MapChart> {
    Json(service.map().clone())
}

/// GET /api/v1/charts/donut
pub async fn get_donut(State(service): State<AppState>) -> Json<Figure> {
    Json(service.donut().clone())
}

/// GET /api/v1/charts/mode?mode=X
pub async fn get_mode_charts(
    State(service): State<AppState>,
    Query(params): Query<ModeQuery>,
) -> Json<ModeCharts> {
    Json(service.mode_charts(params.mode.as_deref()))
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No route for {}", uri.path()),
        }),
    )
}
