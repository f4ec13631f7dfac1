//! Create handler.
//!
//! `POST /patients`

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use patients_persistence::core::PatientStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::PatientBody;
use crate::responses::{Envelope, HttpStatus};
use crate::state::AppState;

/// Handler for creating a patient.
///
/// The body is stored as-is; no duplicate check is made. Any `id` in the body
/// is ignored in favour of the one storage assigns.
///
/// # Response
///
/// - `201 Created` - `data` holds the submitted fields plus the assigned id
/// - `400 Bad Request` - Body is not a patient JSON object
/// - `500 Internal Server Error` - Storage failed
///
/// # Example
///
/// ```http
/// POST /patients HTTP/1.1
/// Content-Type: application/json
///
/// {"first_name": "Ada", "last_name": "Lovelace"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    PatientBody(input): PatientBody,
) -> RestResult<Response>
where
    S: PatientStorage,
{
    debug!("Processing create request");

    let patient = state.storage().create(input).await?;

    debug!(id = patient.id(), "Patient created");

    Ok(Envelope::new(HttpStatus::Created, "Patient created")
        .with_data(patient)
        .into_response())
}
