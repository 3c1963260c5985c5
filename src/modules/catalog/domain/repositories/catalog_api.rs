use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{
    Credits, DetailedMovie, DetailedTvShow, Movie, SimilarSet, TvShow, VideoListing,
};
use crate::shared::application::{PageRequest, PaginatedResult};
use crate::shared::domain::{CatalogProvider, MediaType};
use crate::shared::errors::AppResult;

/// Filters for the provider's TV discovery endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverTvQuery {
    pub sort_by: Option<String>,
    pub with_genres: Option<String>,
    pub without_genres: Option<String>,
    pub with_original_language: Option<String>,
    pub first_air_date_gte: Option<String>,
    pub vote_count_gte: Option<u32>,
    pub page: PageRequest,
}

impl DiscoverTvQuery {
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref sort_by) = self.sort_by {
            params.push(("sort_by".to_string(), sort_by.clone()));
        }
        if let Some(ref genres) = self.with_genres {
            params.push(("with_genres".to_string(), genres.clone()));
        }
        if let Some(ref genres) = self.without_genres {
            params.push(("without_genres".to_string(), genres.clone()));
        }
        if let Some(ref language) = self.with_original_language {
            params.push(("with_original_language".to_string(), language.clone()));
        }
        if let Some(ref date) = self.first_air_date_gte {
            params.push(("first_air_date.gte".to_string(), date.clone()));
        }
        if let Some(votes) = self.vote_count_gte {
            params.push(("vote_count.gte".to_string(), votes.to_string()));
        }
        params.push(("page".to_string(), self.page.get().to_string()));

        params
    }
}

/// Typed access to one external catalog provider.
///
/// Every method is exactly one provider call: no retry, no caching. Failures
/// come back as `ProviderUnavailable` / `NotFound` / `SerializationError` and
/// the caller decides whether they are fatal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    fn provider(&self) -> CatalogProvider;

    // Movies
    async fn popular_movies(&self, page: PageRequest) -> AppResult<PaginatedResult<Movie>>;
    async fn trending_movies(&self, page: PageRequest) -> AppResult<PaginatedResult<Movie>>;
    async fn search_movies(
        &self,
        query: &str,
        page: PageRequest,
    ) -> AppResult<PaginatedResult<Movie>>;
    async fn movie_details(&self, id: u64) -> AppResult<DetailedMovie>;
    async fn movie_credits(&self, id: u64) -> AppResult<Credits>;
    async fn movie_similar(&self, id: u64) -> AppResult<SimilarSet>;

    // TV
    async fn discover_tv(&self, query: &DiscoverTvQuery) -> AppResult<PaginatedResult<TvShow>>;
    async fn trending_tv(&self, page: PageRequest) -> AppResult<PaginatedResult<TvShow>>;
    async fn search_tv(&self, query: &str, page: PageRequest)
        -> AppResult<PaginatedResult<TvShow>>;
    async fn tv_details(&self, id: u64) -> AppResult<DetailedTvShow>;
    async fn tv_credits(&self, id: u64) -> AppResult<Credits>;
    async fn tv_similar(&self, id: u64) -> AppResult<SimilarSet>;

    // Shared
    async fn videos(&self, media_type: MediaType, id: u64) -> AppResult<VideoListing>;
    /// External identifier (IMDb id) for a person; `None` when the provider has none
    async fn person_imdb_id(&self, person_id: u64) -> AppResult<Option<String>>;
}
