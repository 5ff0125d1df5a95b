//! `limit`/`offset` query parameters with bounds checking.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Validated page window: `1 <= limit <= 100`, `offset >= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Maximum number of books returned.
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: i64,
    /// Number of books skipped.
    #[param(default = 0, minimum = 0)]
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Read `limit` and `offset` from raw query params. Absent keys take defaults; other keys are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let limit = match params.get("limit") {
            Some(v) => parse_int("limit", v)?,
            None => DEFAULT_LIMIT,
        };
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::invalid_field(
                "limit",
                format!("must be between 1 and {}", MAX_LIMIT),
            ));
        }
        let offset = match params.get("offset") {
            Some(v) => parse_int("offset", v)?,
            None => 0,
        };
        if offset < 0 {
            return Err(AppError::invalid_field("offset", "must be greater than or equal to 0"));
        }
        Ok(Pagination { limit, offset })
    }
}

fn parse_int(field: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_field(field, "must be an integer"))
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Pagination::from_params(&params)
    }
}
