use std::sync::Arc;

use crate::modules::catalog::domain::{CatalogApi, DetailRecord, ListingItem, SearchAllResponse};
use crate::modules::catalog::infrastructure::ProviderRegistry;
use crate::shared::application::PageRequest;
use crate::shared::config::CatalogConfig;
use crate::shared::domain::ContentKind;
use crate::shared::errors::{AppError, AppResult};

use super::listing_service::{FeedFilters, ListingService};
use super::orchestrator::DetailOrchestrator;
use super::search_federation::SearchFederation;
use super::worker_pool::WorkerPool;

/// Inbound facade for the catalog pipeline
///
/// Only caller mistakes come back as errors (`InvalidInput`). Anything the
/// provider does wrong shows up as an empty listing or an absent detail.
#[derive(Clone)]
pub struct CatalogService {
    listings: ListingService,
    details: DetailOrchestrator,
    federation: SearchFederation,
    pool: WorkerPool,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>, pool: WorkerPool, filters: FeedFilters) -> Self {
        let listings = ListingService::new(api.clone(), pool.clone(), filters);
        Self {
            details: DetailOrchestrator::new(api, pool.clone()),
            federation: SearchFederation::new(listings.clone()),
            listings,
            pool,
        }
    }

    /// Build the registry, pool and services for the configured provider
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        config.validate()?;
        let registry = ProviderRegistry::from_config(config);
        Self::from_registry(&registry, config)
    }

    pub fn from_registry(registry: &ProviderRegistry, config: &CatalogConfig) -> AppResult<Self> {
        let api = registry.get(config.provider)?;
        Ok(Self::new(
            api,
            WorkerPool::from_config(config),
            FeedFilters::from_config(config),
        ))
    }

    pub fn worker_pool(&self) -> &WorkerPool {
        &self.pool
    }

    pub async fn list_popular(&self, kind: ContentKind, page: u32) -> AppResult<Vec<ListingItem>> {
        let page = PageRequest::new(page)?;
        Ok(self.listings.list_popular(kind, page).await)
    }

    pub async fn list_trending(
        &self,
        kind: ContentKind,
        page: u32,
    ) -> AppResult<Vec<ListingItem>> {
        let page = PageRequest::new(page)?;
        Ok(self.listings.list_trending(kind, page).await)
    }

    pub async fn search(
        &self,
        kind: ContentKind,
        query: &str,
        page: u32,
    ) -> AppResult<Vec<ListingItem>> {
        let query = validate_query(query)?;
        let page = PageRequest::new(page)?;
        Ok(self.listings.search(kind, query, page).await)
    }

    /// `Ok(None)` when the title does not exist, is unreachable, or is not of `kind`
    pub async fn get_detail(&self, kind: ContentKind, id: u64) -> AppResult<Option<DetailRecord>> {
        if id == 0 {
            return Err(AppError::InvalidInput(
                "Content id must be positive".to_string(),
            ));
        }
        Ok(self.details.get_detail(kind, id).await)
    }

    pub async fn search_all(&self, query: &str, page: u32) -> AppResult<SearchAllResponse> {
        let query = validate_query(query)?;
        let page = PageRequest::new(page)?;
        Ok(self.federation.search_all(query, page).await)
    }
}

fn validate_query(query: &str) -> AppResult<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
