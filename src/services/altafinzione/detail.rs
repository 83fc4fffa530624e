//! Detail aggregator
//!
//! Loads one title: the post itself, then cast, related titles and the
//! category taxonomy concurrently, then (series only) the season listing.

use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::adapter::{parse_runtime_minutes, to_search_responses};
use super::client::{slug_from_url, SiteClient};
use super::episodes::{extract_episodes, season_names};
use super::types::{ActorsData, Datum, EpisodesApi, MainPageApi, PostsApi, UiData};
use crate::error::ProviderError;
use crate::models::{Actor, LoadKind, LoadResponse, TvType};
use crate::services::metrics::record_degraded;

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Collapse one best-effort piece to `Some` or `None`, logging the failure
pub fn settle<T>(piece: &str, result: Result<Option<T>, ProviderError>) -> Option<T> {
    match result {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            warn!(piece, "Detail piece returned no payload, using empty value");
            record_degraded(piece);
            None
        }
        Err(e) => {
            warn!(piece, error = %e, "Detail piece failed, using empty value");
            record_degraded(piece);
            None
        }
    }
}

/// Cast names from the terms envelope
fn actors_of(data: Option<ActorsData>) -> Vec<Actor> {
    data.and_then(|d| d.terms)
        .and_then(|t| t.actors)
        .unwrap_or_default()
        .into_iter()
        .map(|term| Actor {
            name: term.value.unwrap_or_default(),
        })
        .collect()
}

/// Load the detail page of the title at `url`
pub async fn load_detail(
    client: &SiteClient,
    api_name: &str,
    url: &str,
) -> Result<LoadResponse, ProviderError> {
    let url_slug = slug_from_url(url).ok_or(ProviderError::MissingData("slug"))?;

    let post: Datum = client
        .get_json::<PostsApi>(&client.post_url(&url_slug))
        .await?
        .and_then(|envelope| envelope.post)
        .ok_or(ProviderError::MissingData("post"))?;

    let slug = post.slug.clone().unwrap_or(url_slug);
    let tv_type = TvType::from_tag(post.kind.as_deref());
    debug!("Loading {} '{}' ({})", tv_type, slug, post.id.unwrap_or_default());

    // Cast, related titles and taxonomy are independent: fetch them together
    let terms = async {
        match post.id {
            Some(id) => client.get_json::<ActorsData>(&client.terms_url(id)).await,
            None => Err(ProviderError::MissingData("post id")),
        }
    };
    let related_url = client.related_url(&slug);
    let taxonomy_url = client.taxonomy_url();
    let (terms, related, taxonomy) = tokio::join!(
        terms,
        client.get_json::<MainPageApi>(&related_url),
        client.get_json::<UiData>(&taxonomy_url),
    );

    let actors = actors_of(settle("cast", terms));
    let recommendations = settle("related", related)
        .and_then(|page| page.data)
        .map(|data| to_search_responses(&data, client.main_url(), api_name));
    let tags = match settle("taxonomy", taxonomy) {
        Some(taxonomy) => taxonomy.resolve_all(post.category_ids.as_deref().unwrap_or_default()),
        None => Vec::new(),
    };

    let trailer_ids: Vec<&str> = post
        .youtube_trailer_id
        .as_ref()
        .map(|ids| ids.ids())
        .unwrap_or_default();

    let (trailer, kind) = if tv_type == TvType::Movie {
        let trailer = trailer_ids.choose(&mut rand::thread_rng()).copied();
        (
            trailer,
            LoadKind::Movie {
                data_url: client.movie_stream_url(&slug),
            },
        )
    } else {
        // Series embed the first trailer id, unlike movies
        let trailer = trailer_ids.first().copied();
        let seasons = settle(
            "seasons",
            client
                .get_json::<EpisodesApi>(&client.seasons_url(&slug))
                .await,
        )
        .and_then(|page| page.seasons)
        .unwrap_or_default();

        (
            trailer,
            LoadKind::TvSeries {
                episodes: extract_episodes(client, &seasons, &slug),
                season_names: season_names(&seasons),
            },
        )
    };

    Ok(LoadResponse {
        name: post.title.clone().unwrap_or_default(),
        url: client.title_url(&slug),
        api_name: api_name.to_string(),
        tv_type,
        poster_url: post.large_image.clone(),
        year: post.year.as_deref().and_then(|y| y.trim().parse().ok()),
        plot: post.plot.clone(),
        rating: post.rating.map(|r| r as i32),
        duration: parse_runtime_minutes(post.runtime.as_deref()),
        tags,
        actors,
        recommendations,
        trailers: trailer
            .map(|id| format!("{}{}", YOUTUBE_WATCH_URL, id))
            .into_iter()
            .collect(),
        tmdb_id: post.tmdb_id.clone(),
        kind,
    })
}
