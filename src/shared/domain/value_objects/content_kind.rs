use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// What a caller asks for, and the classification tag stamped on listing items.
///
/// The provider itself only knows movies and TV; anime is a TV show that
/// passes one of the classifier predicates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContentKind {
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "tvshow")]
    TvShow,
    #[serde(rename = "anime")]
    Anime,
}

impl ContentKind {
    /// The provider-side media type backing this kind
    pub fn media_type(&self) -> MediaType {
        match self {
            ContentKind::Movie => MediaType::Movie,
            ContentKind::TvShow | ContentKind::Anime => MediaType::Tv,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Movie => "movie",
            ContentKind::TvShow => "tvshow",
            ContentKind::Anime => "anime",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ContentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(ContentKind::Movie),
            "tv" | "tvshow" | "tvshows" => Ok(ContentKind::TvShow),
            "anime" => Ok(ContentKind::Anime),
            other => Err(AppError::InvalidInput(format!(
                "Unknown content kind: {}",
                other
            ))),
        }
    }
}

/// Media type as the provider's URL paths spell it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaType {
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "tv")]
    Tv,
}

impl MediaType {
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
