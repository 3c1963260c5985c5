/// Pagination support for provider listings
///
/// The catalog provider pages results itself; callers only pick the page.
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Highest page number the provider will serve
pub const MAX_PAGE: u32 = 500;

/// A validated, 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest(u32);

impl Default for PageRequest {
    fn default() -> Self {
        Self(1)
    }
}

impl PageRequest {
    pub fn new(page: u32) -> AppResult<Self> {
        if page == 0 || page > MAX_PAGE {
            return Err(AppError::InvalidInput(format!(
                "Page must be between 1 and {}, got {}",
                MAX_PAGE, page
            )));
        }
        Ok(Self(page))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Provider paged result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> PaginatedResult<T> {
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
