pub mod catalog_api;

pub use catalog_api::{CatalogApi, DiscoverTvQuery};

#[cfg(test)]
pub use catalog_api::MockCatalogApi;
