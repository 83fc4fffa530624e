//! Stream-link resolution
//!
//! Best effort: every failure ends in an empty link list, never an error.

use tracing::{debug, warn};

use super::bearer::BearerCell;
use super::client::{decode, SiteClient};
use super::types::{LinkApi, Stream};
use crate::models::ExtractorLink;
use crate::services::quality::classify_resolution;

/// Links for every stream that carries a url
pub fn links_from_streams(
    streams: Vec<Stream>,
    source: &str,
    referer: &str,
) -> Vec<ExtractorLink> {
    streams
        .into_iter()
        .filter_map(|stream| {
            let url = stream.url?;
            let resolution = stream.resolution.unwrap_or_default();
            Some(ExtractorLink {
                source: source.to_string(),
                name: stream.download_size.unwrap_or_default(),
                url,
                referer: referer.to_string(),
                quality: classify_resolution(resolution.name.as_deref(), resolution.height),
                is_m3u8: false,
            })
        })
        .collect()
}

/// Fetch the authenticated manifest at `data` and turn it into links
pub async fn resolve_streams(
    client: &SiteClient,
    bearer: &BearerCell,
    source: &str,
    data: &str,
) -> Vec<ExtractorLink> {
    if !client.is_stream_url(data) {
        warn!("Refusing stream manifest outside {}: {}", client.main_url(), data);
        return Vec::new();
    }

    let token = match bearer.get_or_fetch(client).await {
        Ok(token) => token,
        Err(e) => {
            warn!("Bearer bootstrap failed, no links for {}: {}", data, e);
            return Vec::new();
        }
    };

    let manifest = match client.get_text(data, Some(token)).await {
        Ok(text) => decode::<LinkApi>(data, &text),
        Err(e) => Err(e),
    };

    let streams = match manifest {
        Ok(Some(manifest)) => manifest.streams.unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Stream manifest unavailable for {}: {}", data, e);
            Vec::new()
        }
    };

    let links = links_from_streams(streams, source, client.main_url());
    debug!("Resolved {} links for {}", links.len(), data);
    links
}
