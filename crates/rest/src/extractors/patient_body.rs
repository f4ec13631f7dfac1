//! Patient request body extractor.
//!
//! Reads the request body as a [`PatientInput`]. Any failure, whether the body
//! is too large, not JSON, or has a non-string field, becomes a 400 envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use patients_persistence::types::PatientInput;

use crate::error::RestError;

/// Axum extractor for a patient body.
///
/// # Example
///
/// ```rust,ignore
/// use patients_rest::extractors::PatientBody;
///
/// async fn create_handler(PatientBody(input): PatientBody) {
///     println!("Creating {:?}", input.last_name);
/// }
/// ```
#[derive(Debug)]
pub struct PatientBody(pub PatientInput);

impl PatientBody {
    /// Consumes the extractor and returns the parsed input.
    pub fn into_inner(self) -> PatientInput {
        self.0
    }
}

/// Error type for patient body extraction failures.
#[derive(Debug)]
pub enum PatientBodyRejection {
    /// The body could not be read (e.g. it exceeded the size limit).
    Unreadable(String),
    /// The body is not a JSON object of string fields.
    InvalidJson(String),
}

impl From<PatientBodyRejection> for RestError {
    fn from(rejection: PatientBodyRejection) -> Self {
        let message = match rejection {
            PatientBodyRejection::Unreadable(msg) => format!("Unreadable body: {}", msg),
            PatientBodyRejection::InvalidJson(msg) => format!("Invalid JSON: {}", msg),
        };
        RestError::BadRequest { message }
    }
}

impl IntoResponse for PatientBodyRejection {
    fn into_response(self) -> Response {
        RestError::from(self).into_response()
    }
}

impl<S> FromRequest<S> for PatientBody
where
    S: Send + Sync,
{
    type Rejection = PatientBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| PatientBodyRejection::Unreadable(e.body_text()))?;

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| PatientBodyRejection::InvalidJson(e.to_string()))?;

        if !value.is_object() {
            return Err(PatientBodyRejection::InvalidJson(
                "expected a JSON object".to_string(),
            ));
        }

        let input = serde_json::from_value(value)
            .map_err(|e| PatientBodyRejection::InvalidJson(e.to_string()))?;

        Ok(PatientBody(input))
    }
}
