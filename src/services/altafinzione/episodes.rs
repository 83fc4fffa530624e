//! Episode extraction
//!
//! Flattens the per-season episode collections into one ordered episode list.

use super::client::SiteClient;
use super::types::{EpisodeCollection, EpisodeEntry, Season};
use crate::models::{Episode, SeasonData};

impl EpisodeCollection {
    /// Entries in output order.
    ///
    /// Ordered collections keep their source order; keyed collections are
    /// sorted by source episode number since object key order is not reliable.
    pub fn entries(&self) -> Vec<&EpisodeEntry> {
        match self {
            EpisodeCollection::Ordered(list) => list.iter().collect(),
            EpisodeCollection::Keyed(map) => {
                let mut entries: Vec<&EpisodeEntry> = map.values().collect();
                entries.sort_by_key(|entry| entry.number);
                entries
            }
            EpisodeCollection::Other(_) => Vec::new(),
        }
    }
}

/// Build the host episode list for every season of `slug`
pub fn extract_episodes(client: &SiteClient, seasons: &[Season], slug: &str) -> Vec<Episode> {
    let mut out = Vec::new();

    for (season_index, season) in seasons.iter().enumerate() {
        for entry in season.episodes.entries() {
            // Entries without an addressable number are skipped
            let number = match entry.number {
                Some(n) if n >= 0 => n,
                _ => continue,
            };
            let episode = match number.checked_add(1).and_then(|n| u32::try_from(n).ok()) {
                Some(episode) => episode,
                None => continue,
            };
            let label = entry
                .label
                .clone()
                .unwrap_or_else(|| episode.to_string());

            out.push(Episode {
                data: client.episode_stream_url(slug, season_index, number),
                name: format!("Episodio {}", label),
                season: season_index as u32 + 1,
                episode,
            });
        }
    }

    out
}

/// Season display names, 1-indexed by position
pub fn season_names(seasons: &[Season]) -> Vec<SeasonData> {
    seasons
        .iter()
        .enumerate()
        .map(|(index, season)| SeasonData {
            season: index as u32 + 1,
            name: season.season_label.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> SiteClient {
        SiteClient::with_defaults("https://example.com").unwrap()
    }

    fn seasons(value: serde_json::Value) -> Vec<Season> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ordered_season() {
        let seasons = seasons(json!([
            {"episodes": [{"label": "1", "number": 0}, {"label": "2", "number": 1}]}
        ]));
        let episodes = extract_episodes(&client(), &seasons, "dark");

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].season, 1);
        assert_eq!(episodes[0].episode, 1);
        assert_eq!(episodes[0].name, "Episodio 1");
        assert_eq!(episodes[1].season, 1);
        assert_eq!(episodes[1].episode, 2);
        assert_eq!(episodes[1].name, "Episodio 2");
        assert_eq!(
            episodes[1].data,
            "https://example.com/api/post/urls/stream/dark/0/1"
        );
    }

    #[test]
    fn test_keyed_season_at_index_two() {
        let seasons = seasons(json!([
            {"episodes": []},
            {"episodes": []},
            {"episodes": {"4": {"label": "5", "number": 4}}}
        ]));
        let episodes = extract_episodes(&client(), &seasons, "dark");

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].season, 3);
        assert_eq!(episodes[0].episode, 5);
        assert_eq!(episodes[0].name, "Episodio 5");
        assert_eq!(
            episodes[0].data,
            "https://example.com/api/post/urls/stream/dark/2/4"
        );
    }

    #[test]
    fn test_keyed_season_sorted_by_number() {
        let seasons = seasons(json!([
            {"episodes": {
                "10": {"label": "11", "number": 10},
                "2": {"label": "3", "number": 2},
                "1": {"label": "2", "number": 1}
            }}
        ]));
        let numbers: Vec<u32> = extract_episodes(&client(), &seasons, "s")
            .iter()
            .map(|e| e.episode)
            .collect();
        assert_eq!(numbers, vec![2, 3, 11]);
    }

    #[test]
    fn test_unknown_shape_skipped() {
        let seasons = seasons(json!([
            {"episodes": "coming soon"},
            {"episodes": [{"label": "1", "number": 0}]}
        ]));
        let episodes = extract_episodes(&client(), &seasons, "dark");

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].season, 2);
    }

    #[test]
    fn test_missing_number_skipped_missing_label_defaults() {
        let seasons = seasons(json!([
            {"episodes": [{"label": "1"}, {"number": 3}]}
        ]));
        let episodes = extract_episodes(&client(), &seasons, "dark");

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].episode, 4);
        assert_eq!(episodes[0].name, "Episodio 4");
    }

    #[test]
    fn test_out_of_range_number_skipped() {
        let seasons = seasons(json!([
            {"episodes": [
                {"label": "x", "number": 9223372036854775807i64},
                {"label": "y", "number": 4294967295u32},
                {"label": "z", "number": 4294967294u32},
                {"label": "1", "number": 0}
            ]}
        ]));
        let episodes = extract_episodes(&client(), &seasons, "dark");

        let summary: Vec<(u32, &str)> = episodes
            .iter()
            .map(|e| (e.episode, e.name.as_str()))
            .collect();
        assert_eq!(summary, vec![(u32::MAX, "Episodio z"), (1, "Episodio 1")]);
    }

    #[test]
    fn test_season_names() {
        let seasons = seasons(json!([
            {"season_label": "Stagione 1"},
            {}
        ]));
        assert_eq!(
            season_names(&seasons),
            vec![
                SeasonData { season: 1, name: Some("Stagione 1".to_string()) },
                SeasonData { season: 2, name: None },
            ]
        );
    }
}
