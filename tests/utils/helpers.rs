/// Test helper functions and service builders
use super::fake_catalog::FakeCatalog;
use showcase_lib::modules::catalog::application::{CatalogService, FeedFilters, WorkerPool};
use showcase_lib::shared::config::CatalogConfig;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Build the facade over a fake provider; the fake is returned for call inspection
pub fn build_service(fake: FakeCatalog, pool_size: usize) -> (CatalogService, Arc<FakeCatalog>) {
    let fake = Arc::new(fake);
    let service = CatalogService::new(
        fake.clone(),
        WorkerPool::new(pool_size, None),
        FeedFilters::from_config(&CatalogConfig::new(TEST_API_KEY)),
    );
    (service, fake)
}
