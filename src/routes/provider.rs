//! Provider Routes
//!
//! JSON surface over [`MainApi`] so an out-of-process host can drive the
//! provider: listing, search, detail and link resolution.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ProviderError;
use crate::models::{ExtractorLink, SearchResponse, TvType};
use crate::AppState;

type RouteError = (StatusCode, Json<serde_json::Value>);

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct MainPageQuery {
    pub section: usize,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Deserialize)]
pub struct LoadQuery {
    pub url: String,
}

#[derive(Deserialize)]
pub struct LinksQuery {
    pub data: String,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub name: String,
    pub lang: String,
    pub main_url: String,
    pub supported_types: Vec<TvType>,
    pub has_main_page: bool,
    pub has_chromecast_support: bool,
}

#[derive(Serialize)]
pub struct SectionItem {
    pub index: usize,
    pub name: String,
}

#[derive(Serialize)]
pub struct SectionsResponse {
    pub total: usize,
    pub sections: Vec<SectionItem>,
}

#[derive(Serialize)]
pub struct SearchResultsResponse {
    pub total: usize,
    pub items: Vec<SearchResponse>,
}

#[derive(Serialize)]
pub struct LinksResponse {
    pub total: usize,
    pub links: Vec<ExtractorLink>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn provider_error(e: ProviderError) -> RouteError {
    tracing::error!("Provider error: {}", e);
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({"error": format!("Provider error: {}", e)})),
    )
}

fn bad_request(message: &str) -> RouteError {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message})),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/provider
pub async fn get_provider_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let provider = &state.provider;
    Json(ProviderInfo {
        name: provider.name().to_string(),
        lang: provider.lang().to_string(),
        main_url: provider.main_url().to_string(),
        supported_types: provider.supported_types().to_vec(),
        has_main_page: provider.has_main_page(),
        has_chromecast_support: provider.has_chromecast_support(),
    })
}

/// GET /api/sections
pub async fn get_sections(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let sections: Vec<SectionItem> = state
        .provider
        .main_page()
        .into_iter()
        .enumerate()
        .map(|(index, request)| SectionItem {
            index,
            name: request.name,
        })
        .collect();

    Json(SectionsResponse {
        total: sections.len(),
        sections,
    })
}

/// GET /api/main-page?section=&page=
pub async fn get_main_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MainPageQuery>,
) -> Result<impl IntoResponse, RouteError> {
    if query.page == 0 {
        return Err(bad_request("Pages start at 1"));
    }

    let request = state
        .provider
        .main_page()
        .into_iter()
        .nth(query.section)
        .ok_or_else(|| bad_request("Unknown section"))?;

    let page = state
        .provider
        .get_main_page(query.page, &request)
        .await
        .map_err(provider_error)?;

    Ok(Json(page))
}

/// GET /api/search?q=
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, RouteError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(bad_request("Missing search query"));
    }

    let items = state.provider.search(q).await.map_err(provider_error)?;

    Ok(Json(SearchResultsResponse {
        total: items.len(),
        items,
    }))
}

/// GET /api/load?url=
pub async fn load(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoadQuery>,
) -> Result<impl IntoResponse, RouteError> {
    let response = state
        .provider
        .load(&query.url)
        .await
        .map_err(provider_error)?;

    Ok(Json(response))
}

/// GET /api/links?data=
///
/// Always 200: an unresolvable manifest is an empty list.
pub async fn load_links(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LinksQuery>,
) -> impl IntoResponse {
    let links = state.provider.load_links(&query.data).await;

    Json(LinksResponse {
        total: links.len(),
        links,
    })
}
