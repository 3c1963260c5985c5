use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Supported catalog data providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CatalogProvider {
    /// The Movie Database - default provider
    #[serde(rename = "tmdb")]
    Tmdb,
}

impl Default for CatalogProvider {
    fn default() -> Self {
        Self::Tmdb
    }
}

impl CatalogProvider {
    /// Default REST base URL for the provider
    pub fn default_base_url(&self) -> &'static str {
        match self {
            CatalogProvider::Tmdb => "https://api.themoviedb.org/3",
        }
    }
}

impl fmt::Display for CatalogProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogProvider::Tmdb => "tmdb",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CatalogProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tmdb" => Ok(CatalogProvider::Tmdb),
            other => Err(AppError::InvalidInput(format!(
                "Unknown catalog provider: {}",
                other
            ))),
        }
    }
}
