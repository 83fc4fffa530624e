//! AltaFinzione content provider.
//!
//! Fetches the AltaFinzione catalog, search results, detail pages and stream
//! links and adapts them to the host data model in [`models`]. The host drives
//! the provider through [`services::api::MainApi`].

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;
use std::time::Instant;

pub use error::ProviderError;
pub use services::altafinzione::AltaFinzioneProvider;
pub use services::api::MainApi;

/// Application state shared across handlers
pub struct AppState {
    pub provider: Arc<dyn MainApi>,
    pub start_time: Instant,
}
