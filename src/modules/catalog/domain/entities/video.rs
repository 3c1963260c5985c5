use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// One entry of a title's video listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub id: String,
    /// Provider-specific playback key (the YouTube video id for YouTube entries)
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    /// Hosting site, e.g. "YouTube" or "Vimeo"
    #[serde(default)]
    pub site: String,
    /// "Trailer", "Teaser", "Clip", "Featurette", ...
    #[serde(default, rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub official: Option<bool>,
    #[serde(default)]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoListing {
    /// Content id the listing belongs to
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Video>,
}
