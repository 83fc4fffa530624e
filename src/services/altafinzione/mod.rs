//! AltaFinzione Integration
//!
//! Content provider for the AltaFinzione streaming catalog.
//!
//! # Overview
//!
//! The site exposes a JSON API under `/api`. This module provides:
//!
//! - **Client**: GET transport and endpoint url builders
//! - **Adapter**: catalog entries to host listing entries, category lookup
//! - **Detail**: detail page aggregation with a three-way concurrent fetch
//! - **Episodes**: keyed or ordered season collections to a flat episode list
//! - **Links**: authenticated stream manifest to playable links
//! - **Bearer**: fetch-once bearer token cell
//!
//! # Usage
//!
//! ```rust,ignore
//! use altafinzione_provider::services::altafinzione::{
//!     AltaFinzioneProvider, BearerCell, SiteClient, DEFAULT_BEARER_SOURCE,
//! };
//! use altafinzione_provider::services::api::MainApi;
//!
//! let client = SiteClient::with_defaults("https://example.com")?;
//! let provider = AltaFinzioneProvider::new(client, BearerCell::new(DEFAULT_BEARER_SOURCE));
//! let detail = provider.load("https://example.com/p/dune").await?;
//! let links = provider.load_links(&detail.episodes()[0].data).await;
//! ```

pub mod adapter;
pub mod bearer;
pub mod client;
pub mod detail;
pub mod episodes;
pub mod links;
pub mod provider;
pub mod types;

// Re-exports for convenience
pub use bearer::{BearerCell, DEFAULT_BEARER_SOURCE};
pub use client::SiteClient;
pub use provider::{AltaFinzioneProvider, PROVIDER_NAME};
pub use types::{
    ActorsData, Category, Datum, EpisodeCollection, EpisodeEntry, EpisodesApi, LinkApi,
    MainPageApi, PostsApi, Season, Stream, UiData,
};
