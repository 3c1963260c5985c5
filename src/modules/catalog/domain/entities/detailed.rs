use serde::{Deserialize, Serialize};

use super::null_as_empty;
use crate::shared::domain::ContentKind;

// Supporting types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    #[serde(default)]
    pub iso_3166_1: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub iso_639_1: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: u64,
    #[serde(default)]
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: Option<u32>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// A "created by" entry on a TV show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub credit_id: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Resolved after the fetch; `None` when the lookup failed or the person has none
    #[serde(default, rename = "imdbId")]
    pub imdb_id: Option<String>,
}

// Credits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default, rename = "imdbId")]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default, rename = "imdbId")]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    /// Content id these credits were fetched for
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cast: Vec<CastMember>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub crew: Vec<CrewMember>,
}

// Similar titles, never enriched further
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarEntry {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarSet {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SimilarEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedMovie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
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
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub belongs_to_collection: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub similar: Option<SimilarSet>,
    #[serde(default, rename = "trailerUrl")]
    pub trailer_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedTvShow {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>, // "Returning Series", "Ended", "Canceled"
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub last_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub in_production: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub episode_run_time: Vec<u32>,
    #[serde(default, rename = "type")]
    pub show_type: Option<String>, // "Scripted", "Documentary", "Animation"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub seasons: Vec<Season>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_by: Vec<Creator>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub networks: Vec<Network>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub similar: Option<SimilarSet>,
    #[serde(default, rename = "trailerUrl")]
    pub trailer_url: Option<String>,
}

impl DetailedTvShow {
    pub fn has_genre(&self, genre_id: u32) -> bool {
        self.genres.iter().any(|genre| genre.id == genre_id)
    }
}

/// A fully aggregated detail view of either kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailRecord {
    Movie(Box<DetailedMovie>),
    TvShow(Box<DetailedTvShow>),
}

impl DetailRecord {
    pub fn id(&self) -> u64 {
        match self {
            DetailRecord::Movie(movie) => movie.id,
            DetailRecord::TvShow(show) => show.id,
        }
    }

    pub fn credits(&self) -> Option<&Credits> {
        match self {
            DetailRecord::Movie(movie) => movie.credits.as_ref(),
            DetailRecord::TvShow(show) => show.credits.as_ref(),
        }
    }

    pub fn trailer_url(&self) -> Option<&str> {
        match self {
            DetailRecord::Movie(movie) => movie.trailer_url.as_deref(),
            DetailRecord::TvShow(show) => show.trailer_url.as_deref(),
        }
    }

    /// Provider-side media kind of the record (anime details are TV records)
    pub fn kind(&self) -> ContentKind {
        match self {
            DetailRecord::Movie(_) => ContentKind::Movie,
            DetailRecord::TvShow(_) => ContentKind::TvShow,
        }
    }
}

impl From<DetailedMovie> for DetailRecord {
    fn from(movie: DetailedMovie) -> Self {
        DetailRecord::Movie(Box::new(movie))
    }
}

impl From<DetailedTvShow> for DetailRecord {
    fn from(show: DetailedTvShow) -> Self {
        DetailRecord::TvShow(Box::new(show))
    }
}
