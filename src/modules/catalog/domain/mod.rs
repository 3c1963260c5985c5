pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::*;
pub use repositories::{CatalogApi, DiscoverTvQuery};
pub use services::classifier;
