use serde::{Deserialize, Serialize};

use crate::services::quality::Qualities;

/// Media type as understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TvType {
    Movie,
    TvSeries,
    Others,
}

impl Default for TvType {
    fn default() -> Self {
        Self::Others
    }
}

impl TvType {
    /// Map the remote `type` tag (`movie`, `tvshow`, anything else)
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("movie") => TvType::Movie,
            Some("tvshow") => TvType::TvSeries,
            _ => TvType::Others,
        }
    }
}

impl std::fmt::Display for TvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TvType::Movie => write!(f, "movie"),
            TvType::TvSeries => write!(f, "tvseries"),
            TvType::Others => write!(f, "others"),
        }
    }
}

/// Listing entry (home page rows, search results, recommendations)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub name: String,
    pub url: String,
    pub api_name: String,
    #[serde(rename = "type")]
    pub tv_type: TvType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub quality: String,
}

/// One home page section: display name plus the url prefix the page number is appended to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainPageRequest {
    pub name: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageList {
    pub name: String,
    pub list: Vec<SearchResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageResponse {
    pub items: Vec<HomePageList>,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
}

/// Playable episode reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Url handed back to `load_links`
    pub data: String,
    pub name: String,
    pub season: u32,
    pub episode: u32,
}

/// Season display name (1-indexed season number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonData {
    pub season: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Variant specific part of a load response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LoadKind {
    #[serde(rename_all = "camelCase")]
    Movie { data_url: String },
    #[serde(rename_all = "camelCase")]
    TvSeries {
        episodes: Vec<Episode>,
        season_names: Vec<SeasonData>,
    },
}

/// Full detail page for one title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    pub name: String,
    pub url: String,
    pub api_name: String,
    #[serde(rename = "type")]
    pub tv_type: TvType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    /// Runtime in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub tags: Vec<String>,
    pub actors: Vec<Actor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<SearchResponse>>,
    pub trailers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<String>,
    #[serde(flatten)]
    pub kind: LoadKind,
}

impl LoadResponse {
    pub fn episodes(&self) -> &[Episode] {
        match &self.kind {
            LoadKind::TvSeries { episodes, .. } => episodes,
            LoadKind::Movie { .. } => &[],
        }
    }
}

/// Playable link handed to the host player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorLink {
    pub source: String,
    pub name: String,
    pub url: String,
    pub referer: String,
    pub quality: Qualities,
    pub is_m3u8: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_type_from_tag() {
        assert_eq!(TvType::from_tag(Some("movie")), TvType::Movie);
        assert_eq!(TvType::from_tag(Some("tvshow")), TvType::TvSeries);
        assert_eq!(TvType::from_tag(Some("tvprogram")), TvType::Others);
        assert_eq!(TvType::from_tag(None), TvType::Others);
    }

    #[test]
    fn test_load_response_serializes_kind_inline() {
        let response = LoadResponse {
            name: "Dune".to_string(),
            url: "https://example.com/p/dune".to_string(),
            api_name: "AltaFinzione".to_string(),
            tv_type: TvType::Movie,
            poster_url: None,
            year: Some(2021),
            plot: None,
            rating: None,
            duration: Some(155),
            tags: vec![],
            actors: vec![],
            recommendations: None,
            trailers: vec![],
            tmdb_id: None,
            kind: LoadKind::Movie {
                data_url: "https://example.com/api/post/urls/stream/dune".to_string(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["kind"], "movie");
        assert_eq!(json["type"], "Movie");
        assert_eq!(
            json["dataUrl"],
            "https://example.com/api/post/urls/stream/dune"
        );
        assert!(json.get("posterUrl").is_none());
        assert!(response.episodes().is_empty());
    }
}
