//! Update handler.
//!
//! `PUT /patients/{id}`

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use patients_persistence::core::PatientStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{PatientBody, PatientId};
use crate::responses::{Envelope, HttpStatus};
use crate::state::AppState;

/// Handler for replacing a patient's fields.
///
/// Every non-id column is overwritten; fields missing from the body become
/// null. Existence is decided by the affected-row count of the single update
/// statement.
///
/// # Response
///
/// - `200 OK` - `data` holds the submitted fields plus the path id
/// - `400 Bad Request` - Body is not a patient JSON object
/// - `404 Not Found` - No patient has this id
/// - `500 Internal Server Error` - Storage failed
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    PatientId(id): PatientId,
    PatientBody(input): PatientBody,
) -> RestResult<Response>
where
    S: PatientStorage,
{
    debug!(id, "Processing update request");

    let patient = state.storage().update(id, input).await?;

    debug!(id, "Patient updated");

    Ok(Envelope::new(HttpStatus::Ok, "Patient updated")
        .with_data(patient)
        .into_response())
}
