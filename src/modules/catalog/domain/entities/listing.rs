use serde::{Deserialize, Serialize};

use super::null_as_empty;
use crate::shared::domain::ContentKind;

// Listing-level records as returned inside paged provider responses. `trailer_url`
// and `content_type` are filled in by this crate, never by the provider.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default, rename = "trailerUrl", skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default, rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvShow {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre_ids: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default, rename = "trailerUrl", skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default, rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentKind>,
}

/// Either kind of listing record, for mixed result sequences
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListingItem {
    Movie(Movie),
    TvShow(TvShow),
}

impl ListingItem {
    pub fn id(&self) -> u64 {
        match self {
            ListingItem::Movie(movie) => movie.id,
            ListingItem::TvShow(show) => show.id,
        }
    }

    pub fn content_type(&self) -> Option<ContentKind> {
        match self {
            ListingItem::Movie(movie) => movie.content_type,
            ListingItem::TvShow(show) => show.content_type,
        }
    }

    pub fn trailer_url(&self) -> Option<&str> {
        match self {
            ListingItem::Movie(movie) => movie.trailer_url.as_deref(),
            ListingItem::TvShow(show) => show.trailer_url.as_deref(),
        }
    }

    pub fn set_trailer_url(&mut self, url: Option<String>) {
        match self {
            ListingItem::Movie(movie) => movie.trailer_url = url,
            ListingItem::TvShow(show) => show.trailer_url = url,
        }
    }

    pub fn set_content_type(&mut self, kind: ContentKind) {
        match self {
            ListingItem::Movie(movie) => movie.content_type = Some(kind),
            ListingItem::TvShow(show) => show.content_type = Some(kind),
        }
    }
}

impl From<Movie> for ListingItem {
    fn from(movie: Movie) -> Self {
        ListingItem::Movie(movie)
    }
}

impl From<TvShow> for ListingItem {
    fn from(show: TvShow) -> Self {
        ListingItem::TvShow(show)
    }
}

/// Unified search across the three content buckets.
///
/// The buckets are not de-duplicated against each other; `all_results` is
/// always `movies ++ tv_shows ++ anime_shows`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAllResponse {
    pub movies: Vec<ListingItem>,
    pub tv_shows: Vec<ListingItem>,
    pub anime_shows: Vec<ListingItem>,
    pub all_results: Vec<ListingItem>,
}

impl SearchAllResponse {
    pub fn new(
        movies: Vec<ListingItem>,
        tv_shows: Vec<ListingItem>,
        anime_shows: Vec<ListingItem>,
    ) -> Self {
        let all_results = movies
            .iter()
            .chain(tv_shows.iter())
            .chain(anime_shows.iter())
            .cloned()
            .collect();

        Self {
            movies,
            tv_shows,
            anime_shows,
            all_results,
        }
    }
}
