//! Axum extractors for patient requests.
//!
//! - [`PatientBody`] - Parse the request body as a patient, rejecting with 400
//! - [`PatientId`] - Parse the `{id}` path segment, rejecting with 404

mod patient_body;
mod patient_id;

pub use patient_body::{PatientBody, PatientBodyRejection};
pub use patient_id::PatientId;
