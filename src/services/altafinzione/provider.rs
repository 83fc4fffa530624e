//! AltaFinzione provider
//!
//! Ties the client, adapters and bearer cell together behind [`MainApi`].

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

use super::adapter::to_search_responses;
use super::bearer::BearerCell;
use super::client::SiteClient;
use super::detail::load_detail;
use super::links::resolve_streams;
use super::types::MainPageApi;
use crate::config::Config;
use crate::error::ProviderError;
use crate::models::{
    ExtractorLink, HomePageList, HomePageResponse, LoadResponse, MainPageRequest, SearchResponse,
    TvType,
};
use crate::services::api::MainApi;
use crate::services::metrics::record_request;

pub const PROVIDER_NAME: &str = "AltaFinzione";

const SUPPORTED_TYPES: [TvType; 2] = [TvType::Movie, TvType::TvSeries];

/// Home page sections: (display name, path + query the page number is appended to)
const SECTIONS: [(&str, &str); 9] = [
    ("Più votati", "/api/category/film?type=movie&orderBy=i_piu_votati_dellultimo_mese&page="),
    ("Nuove uscite", "/api/category/nuove-uscite?page="),
    ("Film", "/api/category/film?&orderBy=i_piu_visti&page="),
    ("Serie Tv", "/api/category/serie-tv?&orderBy=i_piu_visti&page="),
    ("Netflix", "/api/category/netflix?&orderBy=i_piu_visti&page="),
    ("Disney", "/api/category/disney?&orderBy=i_piu_visti&page="),
    ("Amazon Prime", "/api/category/amazon-prime?&orderBy=i_piu_visti&page="),
    ("Apple Tv", "/api/category/appletv?&orderBy=i_piu_visti&page="),
    ("Anime", "/api/category/anime?&orderBy=i_piu_visti&page="),
];

/// Content provider for the AltaFinzione catalog
#[derive(Clone)]
pub struct AltaFinzioneProvider {
    client: SiteClient,
    bearer: BearerCell,
}

impl AltaFinzioneProvider {
    pub fn new(client: SiteClient, bearer: BearerCell) -> Self {
        Self { client, bearer }
    }

    /// Build the provider from application configuration
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let client = SiteClient::new(
            &config.site_url,
            &config.user_agent,
            Duration::from_millis(config.fetch_timeout_ms),
        )?;
        Ok(Self::new(client, BearerCell::new(&config.bearer_source_url)))
    }

    pub fn bearer(&self) -> &BearerCell {
        &self.bearer
    }

    /// Fetch one catalog envelope and adapt its entries.
    ///
    /// An empty `data` list is a valid empty page; an absent one is an error.
    async fn fetch_listing(&self, url: &str) -> Result<Vec<SearchResponse>, ProviderError> {
        let data = self
            .client
            .get_json::<MainPageApi>(url)
            .await
            .and_then(|page| {
                page.and_then(|p| p.data)
                    .ok_or(ProviderError::MissingData("data"))
            })
            .map_err(|e| {
                error!("Listing failed for {}: {}", url, e);
                e
            })?;

        debug!("Listing {} returned {} entries", url, data.len());
        Ok(to_search_responses(&data, self.client.main_url(), PROVIDER_NAME))
    }
}

#[async_trait]
impl MainApi for AltaFinzioneProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn lang(&self) -> &str {
        "it"
    }

    fn main_url(&self) -> &str {
        self.client.main_url()
    }

    fn supported_types(&self) -> &[TvType] {
        &SUPPORTED_TYPES
    }

    fn has_main_page(&self) -> bool {
        true
    }

    fn has_chromecast_support(&self) -> bool {
        true
    }

    fn main_page(&self) -> Vec<MainPageRequest> {
        SECTIONS
            .iter()
            .map(|(name, path)| MainPageRequest {
                name: name.to_string(),
                data: format!("{}{}", self.client.main_url(), path),
            })
            .collect()
    }

    async fn get_main_page(
        &self,
        page: u32,
        request: &MainPageRequest,
    ) -> Result<HomePageResponse, ProviderError> {
        record_request("main_page");
        let list = self
            .fetch_listing(&format!("{}{}", request.data, page))
            .await?;
        // A non-empty page is taken to mean there may be another one
        let has_next = !list.is_empty();

        Ok(HomePageResponse {
            items: vec![HomePageList {
                name: request.name.clone(),
                list,
            }],
            has_next,
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResponse>, ProviderError> {
        record_request("search");
        self.fetch_listing(&self.client.search_url(query)).await
    }

    async fn load(&self, url: &str) -> Result<LoadResponse, ProviderError> {
        record_request("load");
        load_detail(&self.client, PROVIDER_NAME, url)
            .await
            .map_err(|e| {
                error!("Load failed for {}: {}", url, e);
                e
            })
    }

    async fn load_links(&self, data: &str) -> Vec<ExtractorLink> {
        record_request("load_links");
        resolve_streams(&self.client, &self.bearer, PROVIDER_NAME, data).await
    }
}
