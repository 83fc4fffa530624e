//! AltaFinzione API Types
//!
//! Type definitions for the site's JSON API responses. Every field is optional:
//! the site omits, nulls or mistypes fields freely and a single bad field must
//! never fail the whole decode, so every field goes through a lenient decoder.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Lenient scalar helpers
// ============================================================================

/// Accept a JSON string or number and keep it as text; anything else is `None`
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accept a JSON integer, float or numeric string as an integer
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

/// Accept a JSON number or numeric string as a float
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a JSON bool, 0/1 or "true"/"false"
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|n| n != 0),
        Some(Value::String(s)) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Integer list; entries that are not integers are dropped, a non-list is `None`
fn lenient_i64_list<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(items.iter().filter_map(value_to_i64).collect()),
        _ => None,
    })
}

/// Any nested record or list; a value of the wrong shape is `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

// ============================================================================
// Catalog Types
// ============================================================================

/// Paginated catalog envelope (category pages, search, related titles)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MainPageApi {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub current_page: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<Vec<Datum>>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub first_page_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub from: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub last_page: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub last_page_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub links: Option<Vec<PageLink>>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub next_page_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub per_page: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub prev_page_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub to: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total: Option<i64>,
}

/// Pagination link
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PageLink {
    #[serde(default, deserialize_with = "string_or_number")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub active: Option<bool>,
}

/// Detail envelope from /api/posts/slug/{slug}
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PostsApi {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub post: Option<Datum>,
}

/// Trailer ids arrive either as a single id or as a list of ids
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TrailerIds {
    One(String),
    Many(Vec<String>),
}

impl TrailerIds {
    /// Non-blank ids in source order
    pub fn ids(&self) -> Vec<&str> {
        let all: Vec<&str> = match self {
            TrailerIds::One(id) => vec![id.as_str()],
            TrailerIds::Many(ids) => ids.iter().map(String::as_str).collect(),
        };
        all.into_iter()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    }
}

/// A movie or series as the site describes it
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Datum {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, rename = "type", deserialize_with = "string_or_number")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub imdb_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub tmdb_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub youtube_trailer_id: Option<TrailerIds>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub comments_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub seasons_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub viewed_posts_count: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub poster_image: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub small_image: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub large_image: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub large_image_mobile: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub final_quality: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub poster_image_src: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title_without_special_characters: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quality_score: Option<QualityScore>,
    #[serde(default, rename = "categories_ids", deserialize_with = "lenient_i64_list")]
    pub category_ids: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub show_next_episode_flag: Option<bool>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub imdb_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct QualityScore {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub video_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub audio_score: Option<i64>,
}

// ============================================================================
// Cast & Crew Types
// ============================================================================

/// Envelope from /api/posts/terms/{id}
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ActorsData {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub terms: Option<Terms>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Terms {
    #[serde(default, deserialize_with = "lenient")]
    pub actors: Option<Vec<Term>>,
    #[serde(default, deserialize_with = "lenient")]
    pub writers: Option<Vec<Term>>,
    #[serde(default, deserialize_with = "lenient")]
    pub directors: Option<Vec<Term>>,
}

/// A person attached to a post
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Term {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub taxonomy_id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cast_as: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub slug: Option<String>,
}

// ============================================================================
// Category Taxonomy Types
// ============================================================================

/// Envelope from /api/generic/ui
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UiData {
    #[serde(default, deserialize_with = "lenient")]
    pub featured_categories: Option<Vec<Category>>,
    #[serde(default, deserialize_with = "lenient")]
    pub movie_categories: Option<Vec<Category>>,
    #[serde(default, deserialize_with = "lenient")]
    pub tvshow_categories: Option<Vec<Category>>,
    #[serde(default, deserialize_with = "lenient")]
    pub tvprogram_categories: Option<Vec<Category>>,
    #[serde(default, deserialize_with = "lenient")]
    pub qualities: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_i64_list")]
    pub years: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub homepage_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub image_url: Option<String>,
}

// ============================================================================
// Season Types
// ============================================================================

/// Envelope from /api/posts/seasons/{slug}
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EpisodesApi {
    #[serde(default, deserialize_with = "lenient")]
    pub seasons: Option<Vec<Season>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Season {
    #[serde(default)]
    pub episodes: EpisodeCollection,
    #[serde(default, deserialize_with = "string_or_number")]
    pub season_label: Option<String>,
}

/// Episodes of one season: the site sends either an object keyed by episode
/// or a plain array, and occasionally something else entirely.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum EpisodeCollection {
    Ordered(Vec<EpisodeEntry>),
    Keyed(BTreeMap<String, EpisodeEntry>),
    Other(serde_json::Value),
}

impl Default for EpisodeCollection {
    fn default() -> Self {
        EpisodeCollection::Other(serde_json::Value::Null)
    }
}

/// One episode inside a season collection; `number` is 0-indexed
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EpisodeEntry {
    #[serde(default, deserialize_with = "string_or_number")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub number: Option<i64>,
}

// ============================================================================
// Stream Manifest Types
// ============================================================================

/// Envelope from /api/post/urls/stream/...
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LinkApi {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub streams: Option<Vec<Stream>>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub backdrop_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub poster_url: Option<String>,
}

/// One encoded rendition
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Stream {
    #[serde(default, deserialize_with = "string_or_number")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub download_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub length: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub audio_codec: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub season_label: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub episode_label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub resolution: Option<Resolution>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub selected: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub need_upgrade: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Resolution {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_default: Option<bool>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub height: Option<i64>,
}
