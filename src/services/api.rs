//! Host-facing provider interface

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{
    ExtractorLink, HomePageResponse, LoadResponse, MainPageRequest, SearchResponse, TvType,
};

/// Operations a content provider exposes to the host.
///
/// Listing and detail calls fail with a [`ProviderError`] when the site
/// returns nothing usable; link resolution is best effort and never fails.
#[async_trait]
pub trait MainApi: Send + Sync {
    fn name(&self) -> &str;

    fn lang(&self) -> &str;

    fn main_url(&self) -> &str;

    fn supported_types(&self) -> &[TvType];

    fn has_main_page(&self) -> bool {
        false
    }

    fn has_chromecast_support(&self) -> bool {
        false
    }

    /// Home page sections, in display order
    fn main_page(&self) -> Vec<MainPageRequest> {
        Vec::new()
    }

    /// One page of one home page section (pages start at 1)
    async fn get_main_page(
        &self,
        page: u32,
        request: &MainPageRequest,
    ) -> Result<HomePageResponse, ProviderError>;

    async fn search(&self, query: &str) -> Result<Vec<SearchResponse>, ProviderError>;

    /// Full detail page of the title at `url`
    async fn load(&self, url: &str) -> Result<LoadResponse, ProviderError>;

    /// Playable links for a movie or episode data url
    async fn load_links(&self, data: &str) -> Vec<ExtractorLink>;
}
