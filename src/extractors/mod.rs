//! Request extractors that reject with [`crate::error::AppError`].

pub mod json;
pub mod pagination;

pub use json::ValidJson;
pub use pagination::{Pagination, DEFAULT_LIMIT, MAX_LIMIT};
