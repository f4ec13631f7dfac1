//! Read handler.
//!
//! `GET /patients/{id}`

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use patients_persistence::core::PatientStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::PatientId;
use crate::responses::{Envelope, HttpStatus};
use crate::state::AppState;

/// Handler for reading one patient.
///
/// # Response
///
/// - `200 OK` - `data` holds the patient
/// - `404 Not Found` - No patient has this id
/// - `500 Internal Server Error` - Storage failed
///
/// # Example
///
/// ```http
/// GET /patients/7 HTTP/1.1
/// Host: localhost:3000
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    PatientId(id): PatientId,
) -> RestResult<Response>
where
    S: PatientStorage,
{
    debug!(id, "Processing read request");

    match state.storage().read(id).await? {
        Some(patient) => Ok(Envelope::new(HttpStatus::Ok, "Patient retrieved")
            .with_data(patient)
            .into_response()),
        None => {
            debug!(id, "Patient not found");
            Err(RestError::NotFound)
        }
    }
}
