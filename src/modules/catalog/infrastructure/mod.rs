pub mod adapters;
pub mod http_client;
pub mod registry;

pub use adapters::TmdbAdapter;
pub use http_client::CatalogHttpClient;
pub use registry::ProviderRegistry;
