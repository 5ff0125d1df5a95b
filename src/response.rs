//! Acknowledgement body shared by mutating endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Detail {
            detail: detail.into(),
        }
    }

    pub fn book_deleted(id: i64) -> Self {
        Detail::new(format!("book id={} deleted", id))
    }
}
