//! Request extractors.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;

use crate::error::AppError;

/// The `{id}` path segment, if present and numeric.
///
/// Never rejects: a route without an `{id}` segment, or a segment that is not
/// an integer, yields `OptionalId(None)` so handlers can answer "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalId(pub Option<DbId>);

impl OptionalId {
    /// The id, or [`CoreError::MissingId`] for `entity`.
    pub fn require(self, entity: &'static str) -> Result<DbId, AppError> {
        self.0
            .ok_or(AppError::Core(CoreError::MissingId { entity }))
    }
}

impl<S> FromRequestParts<S> for OptionalId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Path(params)) => params.get("id").and_then(|v| v.trim().parse().ok()),
            Err(_) => None,
        };
        Ok(Self(id))
    }
}
