//! Bearer token bootstrap
//!
//! The stream manifest endpoint wants a bearer token that is published,
//! base64 encoded, in a remote text file. It is fetched on first use and
//! reused for the lifetime of the cell.

use base64::{engine::general_purpose, Engine as _};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::client::SiteClient;
use crate::error::ProviderError;

/// Where the encoded token is published
pub const DEFAULT_BEARER_SOURCE: &str =
    "https://raw.githubusercontent.com/Snooze6712/njiogaerhshrtgiokm/main/O0O0000000000O0O0.txt";

/// Decode a base64 text body into a UTF-8 string
pub fn decode_base64_text(encoded: &str) -> Result<String, ProviderError> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ProviderError::Parse(format!("invalid base64: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ProviderError::Parse(format!("invalid utf-8: {}", e)))
}

/// Fetch-once cell for the bearer token.
///
/// Clones share the same slot. A failed or blank fetch leaves the slot empty,
/// so the next caller retries.
#[derive(Clone)]
pub struct BearerCell {
    source_url: String,
    token: Arc<OnceCell<String>>,
}

impl BearerCell {
    pub fn new(source_url: &str) -> Self {
        Self {
            source_url: source_url.to_string(),
            token: Arc::new(OnceCell::new()),
        }
    }

    /// Cell that already holds a token
    pub fn with_token(token: &str) -> Self {
        Self {
            source_url: DEFAULT_BEARER_SOURCE.to_string(),
            token: Arc::new(OnceCell::new_with(Some(token.to_string()))),
        }
    }

    /// Currently held token, if any
    pub fn current(&self) -> Option<&str> {
        self.token.get().map(String::as_str)
    }

    /// Return the held token, fetching it first if the slot is empty
    pub async fn get_or_fetch(&self, client: &SiteClient) -> Result<&str, ProviderError> {
        let token = self
            .token
            .get_or_try_init(|| async {
                let body = client.get_text(&self.source_url, None).await?;
                let token = decode_base64_text(&body)?.trim().to_string();
                if token.is_empty() {
                    warn!("Bearer source returned a blank token");
                    return Err(ProviderError::MissingData("bearer token"));
                }
                info!("Bearer token fetched");
                Ok(token)
            })
            .await?;
        Ok(token.as_str())
    }
}
