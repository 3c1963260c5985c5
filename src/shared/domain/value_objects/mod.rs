mod catalog_provider;
mod content_kind;

pub use catalog_provider::CatalogProvider;
pub use content_kind::{ContentKind, MediaType};
