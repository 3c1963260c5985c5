pub mod catalog_http_client;

pub use catalog_http_client::CatalogHttpClient;
