//! Typed path parameter extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use navdeck_core::error::AppError;

/// A numeric `{id}` path segment. Non-numeric ids are rejected with the
/// standard validation error body instead of axum's plain-text response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowId(pub i64);

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        parse_id(&raw).map(Self)
    }
}

/// Parses a row id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse().map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}
