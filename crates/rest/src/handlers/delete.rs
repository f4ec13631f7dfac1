//! Delete handler.
//!
//! `DELETE /patients/{id}`

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use patients_persistence::core::PatientStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::PatientId;
use crate::responses::{Envelope, HttpStatus};
use crate::state::AppState;

/// Handler for deleting a patient.
///
/// # Response
///
/// - `200 OK` - Patient removed, no `data`
/// - `404 Not Found` - No patient has this id (including one already deleted)
/// - `500 Internal Server Error` - Storage failed
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    PatientId(id): PatientId,
) -> RestResult<Response>
where
    S: PatientStorage,
{
    debug!(id, "Processing delete request");

    state.storage().delete(id).await?;

    debug!(id, "Patient deleted");

    Ok(Envelope::new(HttpStatus::Ok, "Patient deleted").into_response())
}
