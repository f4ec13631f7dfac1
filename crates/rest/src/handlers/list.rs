//! List handler.
//!
//! `GET /patients`

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use patients_persistence::core::PatientStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::responses::{Envelope, HttpStatus};
use crate::state::AppState;

/// Handler for listing every patient.
///
/// # Response
///
/// - `200 OK` - `data` holds every stored patient ordered by id (possibly empty)
/// - `500 Internal Server Error` - Storage failed
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PatientStorage,
{
    debug!("Processing list request");

    let patients = state.storage().list().await?;

    debug!(count = patients.len(), "Returning patients");

    Ok(Envelope::new(HttpStatus::Ok, "Patients retrieved")
        .with_data(patients)
        .into_response())
}
