use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;

use crate::modules::catalog::domain::classifier::{
    exclude_anime_from_tv_listing, is_anime_listing, is_anime_strict,
};
use crate::modules::catalog::domain::{
    CatalogApi, DiscoverTvQuery, ListingItem, Movie, TvShow, ANIMATION_GENRE_ID,
};
use crate::shared::application::{PageRequest, PaginatedResult};
use crate::shared::config::CatalogConfig;
use crate::shared::domain::ContentKind;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;

use super::trailer_resolver::TrailerResolver;
use super::worker_pool::WorkerPool;

const POPULARITY_DESC: &str = "popularity.desc";

/// Feed-level filters for the discover-backed listings
#[derive(Debug, Clone, PartialEq)]
pub struct FeedFilters {
    pub popular_tv_since: String,
    pub anime_since: String,
    pub anime_min_votes: u32,
}

impl FeedFilters {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            popular_tv_since: config.popular_tv_since.clone(),
            anime_since: config.anime_since.clone(),
            anime_min_votes: config.anime_min_votes,
        }
    }

    /// Recent non-animated TV by popularity
    pub fn popular_tv(&self, page: PageRequest) -> DiscoverTvQuery {
        DiscoverTvQuery {
            sort_by: Some(POPULARITY_DESC.to_string()),
            first_air_date_gte: Some(self.popular_tv_since.clone()),
            without_genres: Some(ANIMATION_GENRE_ID.to_string()),
            page,
            ..Default::default()
        }
    }

    /// Japanese-language animation with a minimum vote count
    pub fn anime(&self, page: PageRequest) -> DiscoverTvQuery {
        DiscoverTvQuery {
            sort_by: Some(POPULARITY_DESC.to_string()),
            with_original_language: Some("ja".to_string()),
            with_genres: Some(ANIMATION_GENRE_ID.to_string()),
            vote_count_gte: Some(self.anime_min_votes),
            first_air_date_gte: Some(self.anime_since.clone()),
            page,
            ..Default::default()
        }
    }
}

/// Popular, trending and search listings per content kind.
///
/// Every item comes back tagged with its kind and with a trailer lookup
/// attempted. Provider failures produce an empty listing.
#[derive(Clone)]
pub struct ListingService {
    api: Arc<dyn CatalogApi>,
    pool: WorkerPool,
    trailers: TrailerResolver,
    filters: FeedFilters,
}

impl ListingService {
    pub fn new(api: Arc<dyn CatalogApi>, pool: WorkerPool, filters: FeedFilters) -> Self {
        Self {
            trailers: TrailerResolver::new(api.clone(), pool.clone()),
            api,
            pool,
            filters,
        }
    }

    pub async fn list_popular(&self, kind: ContentKind, page: PageRequest) -> Vec<ListingItem> {
        let items = match kind {
            ContentKind::Movie => {
                self.movies("popular movies", self.api.popular_movies(page))
                    .await
            }
            ContentKind::TvShow => {
                let query = self.filters.popular_tv(page);
                self.shows("popular tv", self.api.discover_tv(&query), |_| true)
                    .await
            }
            ContentKind::Anime => {
                let query = self.filters.anime(page);
                self.shows("anime feed", self.api.discover_tv(&query), |_| true)
                    .await
            }
        };
        self.finish(kind, items).await
    }

    pub async fn list_trending(&self, kind: ContentKind, page: PageRequest) -> Vec<ListingItem> {
        let items = match kind {
            ContentKind::Movie => {
                self.movies("trending movies", self.api.trending_movies(page))
                    .await
            }
            ContentKind::TvShow => {
                self.shows("trending tv", self.api.trending_tv(page), |_| true)
                    .await
            }
            ContentKind::Anime => {
                self.shows("trending anime", self.api.trending_tv(page), |show| {
                    is_anime_strict(show)
                })
                .await
            }
        };
        self.finish(kind, items).await
    }

    pub async fn search(
        &self,
        kind: ContentKind,
        query: &str,
        page: PageRequest,
    ) -> Vec<ListingItem> {
        LogContext::search_operation(query, Some(&kind.to_string()), None);

        let items = match kind {
            ContentKind::Movie => {
                self.movies("movie search", self.api.search_movies(query, page))
                    .await
            }
            ContentKind::TvShow => {
                self.shows("tv search", self.api.search_tv(query, page), |show| {
                    !exclude_anime_from_tv_listing(show)
                })
                .await
            }
            ContentKind::Anime => {
                self.shows("anime search", self.api.search_tv(query, page), |show| {
                    is_anime_listing(show)
                })
                .await
            }
        };

        let items = self.finish(kind, items).await;
        LogContext::search_operation(query, Some(&kind.to_string()), Some(items.len()));
        items
    }

    async fn movies<F>(&self, label: &str, call: F) -> Vec<ListingItem>
    where
        F: Future<Output = AppResult<PaginatedResult<Movie>>>,
    {
        match self.pool.run(label, call).await {
            Ok(page) => page.into_results().into_iter().map(Into::into).collect(),
            Err(e) => {
                log::warn!("Listing {} failed: {}", label, e);
                Vec::new()
            }
        }
    }

    async fn shows<F, P>(&self, label: &str, call: F, keep: P) -> Vec<ListingItem>
    where
        F: Future<Output = AppResult<PaginatedResult<TvShow>>>,
        P: Fn(&TvShow) -> bool,
    {
        match self.pool.run(label, call).await {
            Ok(page) => page
                .into_results()
                .into_iter()
                .filter(|show| keep(show))
                .map(Into::into)
                .collect(),
            Err(e) => {
                log::warn!("Listing {} failed: {}", label, e);
                Vec::new()
            }
        }
    }

    /// Tag every item and attach trailers, concurrently and in place
    async fn finish(&self, kind: ContentKind, mut items: Vec<ListingItem>) -> Vec<ListingItem> {
        let trailers = &self.trailers;
        let media_type = kind.media_type();

        join_all(items.iter_mut().map(move |item| async move {
            item.set_content_type(kind);
            let url = trailers.resolve_trailer(item.id(), media_type).await;
            item.set_trailer_url(url);
        }))
        .await;

        items
    }
}
