use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::services::metrics::render;
use crate::AppState;

/// Root endpoint - basic status
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "AltaFinzione Provider",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.provider.name(),
        "status": "running",
        "uptime": state.start_time.elapsed().as_secs(),
    }))
}

/// GET /metrics - Prometheus text exposition of the provider counters
pub async fn metrics() -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let (content_type, body) = render().map_err(|e| {
        tracing::error!("Failed to encode metrics: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": format!("Metrics unavailable: {}", e)})),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, content_type)], body))
}

/// Readiness probe: the provider holds no connections, so ready once a site root is known
pub async fn ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.provider.main_url().is_empty() {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready - site url unknown")
    } else {
        (StatusCode::OK, "ready")
    }
}

/// Liveness probe
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, "alive")
}
