pub mod pagination;

pub use pagination::{PageRequest, PaginatedResult, MAX_PAGE};
