// Shared kernel: cross-cutting types used by every catalog component

pub mod application; // Pagination
pub mod config; // Environment-driven configuration
pub mod domain; // Shared value objects
pub mod errors; // Shared error types
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::CatalogConfig;
pub use errors::{AppError, AppResult};
