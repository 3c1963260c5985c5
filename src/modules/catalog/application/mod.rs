pub mod identity_resolver;
pub mod listing_service;
pub mod orchestrator;
pub mod search_federation;
pub mod service;
pub mod trailer_resolver;
pub mod worker_pool;

pub use identity_resolver::IdentityResolver;
pub use listing_service::{FeedFilters, ListingService};
pub use orchestrator::DetailOrchestrator;
pub use search_federation::SearchFederation;
pub use service::CatalogService;
pub use trailer_resolver::{select_trailer, trailer_url, TrailerResolver};
pub use worker_pool::WorkerPool;
