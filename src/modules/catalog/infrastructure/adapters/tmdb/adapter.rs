use async_trait::async_trait;

use crate::modules::catalog::domain::{
    CatalogApi, Credits, DetailedMovie, DetailedTvShow, DiscoverTvQuery, Movie, SimilarSet, TvShow,
    VideoListing,
};
use crate::modules::catalog::infrastructure::http_client::CatalogHttpClient;
use crate::shared::application::{PageRequest, PaginatedResult};
use crate::shared::config::CatalogConfig;
use crate::shared::domain::{CatalogProvider, MediaType};
use crate::shared::errors::AppResult;

use super::models::PersonExternalIds;

/// TMDB (The Movie Database) v3 REST adapter.
///
/// Maps each [`CatalogApi`] operation onto exactly one TMDB endpoint.
pub struct TmdbAdapter {
    http_client: CatalogHttpClient,
}

impl TmdbAdapter {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            http_client: CatalogHttpClient::new(
                "TMDB",
                &config.base_url,
                &config.api_key,
                &config.user_agent,
            ),
        }
    }

    fn page_params(page: PageRequest) -> Vec<(String, String)> {
        vec![("page".to_string(), page.get().to_string())]
    }

    fn search_params(query: &str, page: PageRequest) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), query.to_string()),
            ("page".to_string(), page.get().to_string()),
        ]
    }

    async fn movie_page(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> AppResult<PaginatedResult<Movie>> {
        let response: PaginatedResult<Movie> = self.http_client.get(endpoint, params).await?;
        log::info!(
            "TMDB: {} returned {} movies (page {})",
            endpoint,
            response.results.len(),
            response.page
        );
        Ok(response)
    }

    async fn tv_page(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> AppResult<PaginatedResult<TvShow>> {
        let response: PaginatedResult<TvShow> = self.http_client.get(endpoint, params).await?;
        log::info!(
            "TMDB: {} returned {} TV shows (page {})",
            endpoint,
            response.results.len(),
            response.page
        );
        Ok(response)
    }
}

#[async_trait]
impl CatalogApi for TmdbAdapter {
    fn provider(&self) -> CatalogProvider {
        CatalogProvider::Tmdb
    }

    // =============================================================================
    // MOVIES
    // =============================================================================

    async fn popular_movies(&self, page: PageRequest) -> AppResult<PaginatedResult<Movie>> {
        self.movie_page("/movie/popular", &Self::page_params(page))
            .await
    }

    async fn trending_movies(&self, page: PageRequest) -> AppResult<PaginatedResult<Movie>> {
        self.movie_page("/trending/movie/week", &Self::page_params(page))
            .await
    }

    async fn search_movies(
        &self,
        query: &str,
        page: PageRequest,
    ) -> AppResult<PaginatedResult<Movie>> {
        log::info!("TMDB: Searching movies for '{}'", query);
        self.movie_page("/search/movie", &Self::search_params(query, page))
            .await
    }

    async fn movie_details(&self, id: u64) -> AppResult<DetailedMovie> {
        log::info!("TMDB: Getting movie details for ID '{}'", id);
        self.http_client.get(&format!("/movie/{}", id), &[]).await
    }

    async fn movie_credits(&self, id: u64) -> AppResult<Credits> {
        self.http_client
            .get(&format!("/movie/{}/credits", id), &[])
            .await
    }

    async fn movie_similar(&self, id: u64) -> AppResult<SimilarSet> {
        self.http_client
            .get(&format!("/movie/{}/similar", id), &[])
            .await
    }

    // =============================================================================
    // TV
    // =============================================================================

    async fn discover_tv(&self, query: &DiscoverTvQuery) -> AppResult<PaginatedResult<TvShow>> {
        self.tv_page("/discover/tv", &query.to_query_params()).await
    }

    async fn trending_tv(&self, page: PageRequest) -> AppResult<PaginatedResult<TvShow>> {
        self.tv_page("/trending/tv/week", &Self::page_params(page))
            .await
    }

    async fn search_tv(
        &self,
        query: &str,
        page: PageRequest,
    ) -> AppResult<PaginatedResult<TvShow>> {
        log::info!("TMDB: Searching TV for '{}'", query);
        self.tv_page("/search/tv", &Self::search_params(query, page))
            .await
    }

    async fn tv_details(&self, id: u64) -> AppResult<DetailedTvShow> {
        log::info!("TMDB: Getting TV show details for ID '{}'", id);
        self.http_client.get(&format!("/tv/{}", id), &[]).await
    }

    async fn tv_credits(&self, id: u64) -> AppResult<Credits> {
        self.http_client
            .get(&format!("/tv/{}/credits", id), &[])
            .await
    }

    async fn tv_similar(&self, id: u64) -> AppResult<SimilarSet> {
        self.http_client
            .get(&format!("/tv/{}/similar", id), &[])
            .await
    }

    // =============================================================================
    // SHARED
    // =============================================================================

    async fn videos(&self, media_type: MediaType, id: u64) -> AppResult<VideoListing> {
        let endpoint = format!("/{}/{}/videos", media_type.path_segment(), id);
        let listing: VideoListing = self.http_client.get(&endpoint, &[]).await?;
        log::debug!("TMDB: {} returned {} videos", endpoint, listing.results.len());
        Ok(listing)
    }

    async fn person_imdb_id(&self, person_id: u64) -> AppResult<Option<String>> {
        let ids: PersonExternalIds = self
            .http_client
            .get(&format!("/person/{}/external_ids", person_id), &[])
            .await?;
        Ok(ids.imdb_id())
    }
}
