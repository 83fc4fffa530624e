pub mod health;
pub mod provider;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health endpoints
        .route("/", get(health::root))
        .route("/metrics", get(health::metrics))
        .route("/ready", get(health::ready))
        .route("/live", get(health::live))
        // Provider endpoints
        .route("/api/provider", get(provider::get_provider_info))
        .route("/api/sections", get(provider::get_sections))
        .route("/api/main-page", get(provider::get_main_page))
        .route("/api/search", get(provider::search))
        .route("/api/load", get(provider::load))
        .route("/api/links", get(provider::load_links))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
