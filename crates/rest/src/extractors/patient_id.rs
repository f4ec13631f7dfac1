//! Patient id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::debug;

use crate::error::RestError;

/// The `{id}` path segment, parsed as a storage id.
///
/// A segment that is not an integer cannot name a stored patient, so it is
/// rejected as [`RestError::NotFound`] before storage is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientId(pub i64);

impl<S> FromRequestParts<S> for PatientId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::NotFound)?;

        raw.trim().parse::<i64>().map(PatientId).map_err(|_| {
            debug!(id = %raw, "Path id is not an integer");
            RestError::NotFound
        })
    }
}
