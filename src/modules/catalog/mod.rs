pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CatalogService;
pub use domain::{DetailRecord, ListingItem, SearchAllResponse};
