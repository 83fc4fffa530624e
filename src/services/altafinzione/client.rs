//! AltaFinzione HTTP Client
//!
//! Thin GET transport plus the endpoint url builders for the site's JSON API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use crate::error::ProviderError;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// AltaFinzione API client
///
/// Holds the site root (`main_url`) and builds every endpoint from it.
#[derive(Clone)]
pub struct SiteClient {
    http: Client,
    main_url: String,
    user_agent: String,
}

impl SiteClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `main_url` - Site root (e.g., "https://example.com")
    /// * `user_agent` - User-Agent header value
    /// * `timeout` - Per-request timeout
    pub fn new(main_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            main_url: main_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        })
    }

    /// Create a client with the default timeout and user agent
    pub fn with_defaults(main_url: &str) -> Result<Self, ProviderError> {
        Self::new(
            main_url,
            DEFAULT_USER_AGENT,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn main_url(&self) -> &str {
        &self.main_url
    }

    /// GET a url and return the body text
    pub async fn get_text(
        &self,
        url: &str,
        bearer: Option<&str>,
    ) -> Result<String, ProviderError> {
        debug!("AltaFinzione request: {}", url);

        let mut request = self
            .http
            .get(url)
            .header("User-Agent", self.user_agent.as_str());
        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// GET a url and decode the JSON body
    ///
    /// A literal `null` body decodes to `None`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, ProviderError> {
        let text = self.get_text(url, None).await?;
        decode(url, &text)
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// Public page of a title, the url handed to the host
    pub fn title_url(&self, slug: &str) -> String {
        format!("{}/p/{}", self.main_url, slug)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/api/search?search={}",
            self.main_url,
            urlencoding::encode(query)
        )
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/api/posts/slug/{}", self.main_url, slug)
    }

    pub fn terms_url(&self, id: i64) -> String {
        format!("{}/api/posts/terms/{}", self.main_url, id)
    }

    pub fn related_url(&self, slug: &str) -> String {
        format!("{}/api/posts/related/{}", self.main_url, slug)
    }

    pub fn taxonomy_url(&self) -> String {
        format!("{}/api/generic/ui", self.main_url)
    }

    pub fn seasons_url(&self, slug: &str) -> String {
        format!("{}/api/posts/seasons/{}", self.main_url, slug)
    }

    /// Stream manifest of a movie
    pub fn movie_stream_url(&self, slug: &str) -> String {
        format!("{}/api/post/urls/stream/{}", self.main_url, slug)
    }

    /// Stream manifest of an episode; `season` and `number` are the site's 0-indexed values
    pub fn episode_stream_url(&self, slug: &str, season: usize, number: i64) -> String {
        format!(
            "{}/api/post/urls/stream/{}/{}/{}",
            self.main_url, slug, season, number
        )
    }

    /// Whether `url` is a stream manifest on this site; only those may carry the bearer
    pub fn is_stream_url(&self, url: &str) -> bool {
        url.starts_with(&format!("{}/api/post/urls/stream/", self.main_url))
    }
}

/// Decode a response body, logging the head of the body on failure
pub fn decode<T: DeserializeOwned>(url: &str, text: &str) -> Result<Option<T>, ProviderError> {
    serde_json::from_str::<Option<T>>(text).map_err(|e| {
        error!("Failed to parse AltaFinzione response for '{}': {}", url, e);
        debug!("Response text: {}", truncate(text, 500));
        ProviderError::from(e)
    })
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Extract the slug from a public title url (`.../p/{slug}`)
pub fn slug_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    while let Some(segment) = segments.next() {
        if segment == "p" {
            return segments
                .next()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SiteClient {
        SiteClient::with_defaults("https://example.com/").unwrap()
    }

    #[test]
    fn test_client_trailing_slash() {
        let client = client();
        assert_eq!(client.main_url(), "https://example.com");
        assert!(!client.post_url("dune").contains("//api"));
    }

    #[test]
    fn test_endpoint_builders() {
        let client = client();
        assert_eq!(client.title_url("dune"), "https://example.com/p/dune");
        assert_eq!(
            client.post_url("dune"),
            "https://example.com/api/posts/slug/dune"
        );
        assert_eq!(
            client.terms_url(12),
            "https://example.com/api/posts/terms/12"
        );
        assert_eq!(
            client.related_url("dune"),
            "https://example.com/api/posts/related/dune"
        );
        assert_eq!(client.taxonomy_url(), "https://example.com/api/generic/ui");
        assert_eq!(
            client.seasons_url("dark"),
            "https://example.com/api/posts/seasons/dark"
        );
        assert_eq!(
            client.movie_stream_url("dune"),
            "https://example.com/api/post/urls/stream/dune"
        );
        assert_eq!(
            client.episode_stream_url("dark", 1, 3),
            "https://example.com/api/post/urls/stream/dark/1/3"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            client().search_url("il padrino & co"),
            "https://example.com/api/search?search=il%20padrino%20%26%20co"
        );
    }

    #[test]
    fn test_is_stream_url() {
        let client = client();
        assert!(client.is_stream_url(&client.movie_stream_url("dune")));
        assert!(client.is_stream_url(&client.episode_stream_url("dark", 0, 2)));
        assert!(!client.is_stream_url("https://evil.example.net/api/post/urls/stream/dune"));
        assert!(!client.is_stream_url("https://example.com.evil.net/api/post/urls/stream/x"));
        assert!(!client.is_stream_url("https://example.com/api/posts/slug/dune"));
        assert!(!client.is_stream_url(""));
    }

    #[test]
    fn test_slug_from_url() {
        assert_eq!(
            slug_from_url("https://example.com/p/dune-parte-due"),
            Some("dune-parte-due".to_string())
        );
        assert_eq!(slug_from_url("https://example.com/p/"), None);
        assert_eq!(slug_from_url("https://example.com/film/dune"), None);
        assert_eq!(slug_from_url("not a url"), None);
    }

    #[test]
    fn test_decode_null_body() {
        let decoded: Option<serde_json::Value> = decode("u", "null").unwrap();
        assert!(decoded.is_none());
        assert!(decode::<serde_json::Value>("u", "<html>").is_err());
    }
}
