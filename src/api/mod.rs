//! HTTP surface of the dashboard: the page plus JSON endpoints for its
//! cards and charts.

pub mod handlers;
pub mod page;
pub mod service;

pub use service::DashboardService;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(service: Arc<DashboardService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/summary", get(handlers::get_summary))
        .route("/api/v1/modes", get(handlers::get_modes))
        // Static charts
        .route("/api/v1/charts/map", get(handlers::get_map))
        .route("/api/v1/charts/donut", get(handlers::get_donut))
        // Selector-driven charts
        .route("/api/v1/charts/mode", get(handlers::get_mode_charts))
        .fallback(handlers::not_found)
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let service = DashboardService::new(Arc::new(fixtures::dataset()), "STANDARD");
        create_router(Arc::new(service))
    }

    async fn fetch(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = fetch(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, body) = get_json("/api/v1/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["total_count"], 4);
        assert_eq!(body["cards"][1]["value"], "50.00%");
    }

    #[tokio::test]
    async fn test_modes() {
        let (_, body) = get_json("/api/v1/modes").await;
        assert_eq!(body["default_mode"], "STANDARD");
        assert_eq!(body["modes"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_map_reports_unmatched() {
        let (status, body) = get_json("/api/v1/charts/map").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unmatched"][0], "Atlantis");
        assert_eq!(body["figure"]["data"][0]["type"], "choropleth");
    }

    #[tokio::test]
    async fn test_donut() {
        let (_, body) = get_json("/api/v1/charts/donut").await;
        assert_eq!(body["data"][0]["values"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mode_charts() {
        let (status, body) = get_json("/api/v1/charts/mode?mode=EXPRESS").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "EXPRESS");
        assert_eq!(body["shipments"], 1);
        assert_eq!(body["line"]["data"][0]["x"].as_array().unwrap().len(), 1);

        let (_, body) = get_json("/api/v1/charts/mode").await;
        assert_eq!(body["mode"], "STANDARD");
    }

    #[tokio::test]
    async fn test_mode_with_space_is_url_decoded() {
        let (_, body) = get_json("/api/v1/charts/mode?mode=SAME%20DAY").await;
        assert_eq!(body["shipments"], 1);
    }

    #[tokio::test]
    async fn test_unknown_mode_is_empty_not_error() {
        let (status, body) = get_json("/api/v1/charts/mode?mode=DRONE").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["shipments"], 0);
        assert_eq!(body["line"]["data"][0]["x"], serde_json::json!([]));
        assert_eq!(body["heatmap"]["data"][0]["z"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, body) = fetch("/").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("COD Shipping Dashboard"));
        assert!(html.contains(r#"<option value="STANDARD" selected>"#));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json("/api/v1/nothing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("/api/v1/nothing"));
    }
}
