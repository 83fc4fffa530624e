//! Catalog adapter
//!
//! Converts site records into the host's listing shapes and resolves
//! category ids against the site taxonomy.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{Category, Datum, UiData};
use crate::models::{SearchResponse, TvType};

lazy_static! {
    static ref RUNTIME_HOURS: Regex = Regex::new(r"(?i)(\d+)\s*h").unwrap();
    static ref RUNTIME_MINUTES: Regex = Regex::new(r"(?i)(\d+)\s*m").unwrap();
    static ref RUNTIME_PLAIN: Regex = Regex::new(r"^\s*(\d+)\s*$").unwrap();
}

/// Convert a catalog entry into a listing entry. Never fails.
pub fn to_search_response(entry: &Datum, main_url: &str, api_name: &str) -> SearchResponse {
    SearchResponse {
        name: entry.title.clone().unwrap_or_default(),
        url: format!("{}/p/{}", main_url, entry.slug.as_deref().unwrap_or_default()),
        api_name: api_name.to_string(),
        tv_type: TvType::from_tag(entry.kind.as_deref()),
        poster_url: entry.poster_image.clone(),
        quality: entry.final_quality.clone().unwrap_or_default(),
    }
}

pub fn to_search_responses(entries: &[Datum], main_url: &str, api_name: &str) -> Vec<SearchResponse> {
    entries
        .iter()
        .map(|entry| to_search_response(entry, main_url, api_name))
        .collect()
}

impl UiData {
    /// Category lists in lookup order
    fn lists(&self) -> [Option<&Vec<Category>>; 4] {
        [
            self.featured_categories.as_ref(),
            self.movie_categories.as_ref(),
            self.tvshow_categories.as_ref(),
            self.tvprogram_categories.as_ref(),
        ]
    }

    /// Display name of a category id; first list holding the id wins, `""` when none does
    pub fn resolve(&self, id: i64) -> String {
        self.lists()
            .into_iter()
            .flatten()
            .find_map(|list| list.iter().find(|c| c.id == Some(id)))
            .and_then(|c| c.name.clone())
            .unwrap_or_default()
    }

    /// Resolve every id, keeping unmatched ids as empty names
    pub fn resolve_all(&self, ids: &[i64]) -> Vec<String> {
        ids.iter().map(|id| self.resolve(*id)).collect()
    }
}

/// Parse a runtime string ("120", "2h 5m", "95 min") into minutes
pub fn parse_runtime_minutes(runtime: Option<&str>) -> Option<u32> {
    let runtime = runtime?.trim();
    if runtime.is_empty() {
        return None;
    }

    if let Some(caps) = RUNTIME_PLAIN.captures(runtime) {
        return caps[1].parse().ok();
    }

    let hours: Option<u32> = RUNTIME_HOURS
        .captures(runtime)
        .and_then(|caps| caps[1].parse().ok());
    let minutes: Option<u32> = RUNTIME_MINUTES
        .captures(runtime)
        .and_then(|caps| caps[1].parse().ok());

    match (hours, minutes) {
        (None, None) => None,
        (h, m) => Some(h.unwrap_or(0) * 60 + m.unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn datum(kind: Option<&str>) -> Datum {
        Datum {
            title: Some("Dune".to_string()),
            slug: Some("dune".to_string()),
            kind: kind.map(str::to_string),
            poster_image: Some("https://img.example.com/dune.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_mapping() {
        let movie = to_search_response(&datum(Some("movie")), "https://example.com", "AltaFinzione");
        assert_eq!(movie.tv_type, TvType::Movie);

        let series = to_search_response(&datum(Some("tvshow")), "https://example.com", "AltaFinzione");
        assert_eq!(series.tv_type, TvType::TvSeries);

        let other = to_search_response(&datum(Some("tvprogram")), "https://example.com", "AltaFinzione");
        assert_eq!(other.tv_type, TvType::Others);
    }

    #[test]
    fn test_link_and_defaults() {
        let result = to_search_response(&datum(Some("movie")), "https://example.com", "AltaFinzione");
        assert_eq!(result.url, "https://example.com/p/dune");
        assert_eq!(result.name, "Dune");
        assert_eq!(result.quality, "");
        assert_eq!(
            result.poster_url.as_deref(),
            Some("https://img.example.com/dune.jpg")
        );

        let empty = to_search_response(&Datum::default(), "https://example.com", "AltaFinzione");
        assert_eq!(empty.name, "");
        assert_eq!(empty.poster_url, None);
        assert_eq!(empty.tv_type, TvType::Others);
    }

    #[test]
    fn test_resolve_category() {
        let taxonomy: UiData = serde_json::from_value(json!({
            "featured_categories": [{"id": 1, "name": "In evidenza"}],
            "movie_categories": [{"id": 7, "name": "Azione"}],
            "tvshow_categories": [{"id": 7, "name": "Azione TV"}, {"id": 9, "name": "Crime"}],
            "tvprogram_categories": [{"id": 9, "name": "Crime programmi"}, {"id": 11, "name": "Talk"}]
        }))
        .unwrap();

        assert_eq!(taxonomy.resolve(7), "Azione");
        assert_eq!(taxonomy.resolve(9), "Crime");
        assert_eq!(taxonomy.resolve(11), "Talk");
        assert_eq!(taxonomy.resolve(99), "");
        assert_eq!(
            taxonomy.resolve_all(&[1, 99, 7]),
            vec!["In evidenza".to_string(), String::new(), "Azione".to_string()]
        );
    }

    #[test]
    fn test_featured_wins() {
        let taxonomy: UiData = serde_json::from_value(json!({
            "featured_categories": [{"id": 7, "name": "Top"}],
            "movie_categories": [{"id": 7, "name": "Azione"}]
        }))
        .unwrap();
        assert_eq!(taxonomy.resolve(7), "Top");
        assert_eq!(UiData::default().resolve(7), "");
    }

    #[test]
    fn test_parse_runtime() {
        assert_eq!(parse_runtime_minutes(Some("120")), Some(120));
        assert_eq!(parse_runtime_minutes(Some("2h 5m")), Some(125));
        assert_eq!(parse_runtime_minutes(Some("95 min")), Some(95));
        assert_eq!(parse_runtime_minutes(Some("1h")), Some(60));
        assert_eq!(parse_runtime_minutes(Some("")), None);
        assert_eq!(parse_runtime_minutes(Some("n/d")), None);
        assert_eq!(parse_runtime_minutes(None), None);
    }
}
