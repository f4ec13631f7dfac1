//! Error types for the patients REST API.
//!
//! Every error is rendered as a response [`Envelope`](crate::responses::Envelope).
//! Details that could leak storage internals are logged and never written to
//! the response body.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Message |
//! |-------|-------------|---------|
//! | NotFound | 404 | Patient not found |
//! | BadRequest | 400 | Invalid request body |
//! | Internal | 500 | An error occurred |
//! | RouteNotFound | 404 | You came to the wrong place. Go back |

use axum::response::{IntoResponse, Response};
use patients_persistence::error::StorageError;
use std::fmt;
use tracing::{error, warn};

use crate::responses::{Envelope, HttpStatus};

/// Message for a missing patient.
pub const PATIENT_NOT_FOUND: &str = "Patient not found";

/// Message for a rejected request body.
pub const INVALID_BODY: &str = "Invalid request body";

/// Message for any storage failure.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Message for requests that match no route.
pub const WRONG_PLACE: &str = "You came to the wrong place. Go back";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// No patient has the requested id (HTTP 404).
    NotFound,

    /// The request body could not be read as a patient (HTTP 400).
    BadRequest {
        /// Parser detail. Logged only.
        message: String,
    },

    /// Storage failed (HTTP 500).
    Internal {
        /// Underlying failure. Logged only.
        message: String,
    },

    /// No route matches the method and path (HTTP 404).
    RouteNotFound,
}

/// Result type for REST operations.
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// Returns the envelope status for this error.
    pub fn http_status(&self) -> HttpStatus {
        match self {
            RestError::NotFound | RestError::RouteNotFound => HttpStatus::NotFound,
            RestError::BadRequest { .. } => HttpStatus::BadRequest,
            RestError::Internal { .. } => HttpStatus::InternalServerError,
        }
    }

    /// Returns the client-facing message for this error.
    pub fn public_message(&self) -> &'static str {
        match self {
            RestError::NotFound => PATIENT_NOT_FOUND,
            RestError::BadRequest { .. } => INVALID_BODY,
            RestError::Internal { .. } => GENERIC_ERROR,
            RestError::RouteNotFound => WRONG_PLACE,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound => write!(f, "{}", PATIENT_NOT_FOUND),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::Internal { message } => write!(f, "Internal error: {}", message),
            RestError::RouteNotFound => write!(f, "No route matched"),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match &self {
            RestError::Internal { message } => error!(error = %message, "Request failed"),
            RestError::BadRequest { message } => warn!(error = %message, "Rejected request body"),
            RestError::NotFound | RestError::RouteNotFound => {}
        }

        Envelope::new(self.http_status(), self.public_message()).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { .. } => RestError::NotFound,
            StorageError::Backend(e) => RestError::Internal {
                message: e.to_string(),
            },
        }
    }
}
