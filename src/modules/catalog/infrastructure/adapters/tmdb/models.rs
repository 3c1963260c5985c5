use serde::{Deserialize, Serialize};

// Provider-only payloads that never leave the adapter

/// `/person/{id}/external_ids`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonExternalIds {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub wikidata_id: Option<String>,
    #[serde(default)]
    pub facebook_id: Option<String>,
    #[serde(default)]
    pub instagram_id: Option<String>,
    #[serde(default)]
    pub twitter_id: Option<String>,
}

impl PersonExternalIds {
    /// IMDb id when present and non-blank
    pub fn imdb_id(self) -> Option<String> {
        self.imdb_id.filter(|id| !id.trim().is_empty())
    }
}
