//! The uniform response envelope.
//!
//! Every body the API writes, success or failure, has this shape:
//!
//! ```json
//! {
//!   "statusCode": 200,
//!   "httpStatus": "OK",
//!   "message": "Patients retrieved",
//!   "timestamp": "Thu Oct 15 2026",
//!   "data": []
//! }
//! ```
//!
//! `data` is omitted when there is nothing to return.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `strftime` pattern for the envelope timestamp, e.g. `Thu Oct 15 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %Y";

/// Symbolic name of the HTTP status carried in `httpStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpStatus {
    /// 200
    Ok,
    /// 201
    Created,
    /// 400
    BadRequest,
    /// 404
    NotFound,
    /// 500
    InternalServerError,
}

impl HttpStatus {
    /// Returns the matching HTTP status code.
    pub fn status_code(self) -> StatusCode {
        match self {
            HttpStatus::Ok => StatusCode::OK,
            HttpStatus::Created => StatusCode::CREATED,
            HttpStatus::BadRequest => StatusCode::BAD_REQUEST,
            HttpStatus::NotFound => StatusCode::NOT_FOUND,
            HttpStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the symbolic name as written on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK",
            HttpStatus::Created => "CREATED",
            HttpStatus::BadRequest => "BAD_REQUEST",
            HttpStatus::NotFound => "NOT_FOUND",
            HttpStatus::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response envelope, optionally carrying a payload.
///
/// # Example
///
/// ```
/// use patients_rest::responses::{Envelope, HttpStatus};
///
/// let envelope = Envelope::new(HttpStatus::Created, "Patient created").with_data(vec![1, 2]);
/// assert_eq!(envelope.status_code, 201);
/// assert_eq!(envelope.data, Some(vec![1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T = ()> {
    /// Numeric HTTP status.
    pub status_code: u16,

    /// Symbolic HTTP status.
    pub http_status: HttpStatus,

    /// Human-readable outcome.
    pub message: String,

    /// Date the response was generated.
    pub timestamp: String,

    /// Payload, omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope {
    /// Creates an envelope without a payload, stamped with the current date.
    pub fn new(status: HttpStatus, message: impl Into<String>) -> Self {
        Self::at(status, message, Utc::now())
    }

    /// Creates an envelope without a payload, stamped with `now`.
    pub fn at(status: HttpStatus, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            status_code: status.status_code().as_u16(),
            http_status: status,
            message: message.into(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            data: None,
        }
    }

    /// Attaches a payload.
    pub fn with_data<T>(self, data: T) -> Envelope<T> {
        Envelope {
            status_code: self.status_code,
            http_status: self.http_status,
            message: self.message,
            timestamp: self.timestamp,
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.http_status.status_code(), Json(self)).into_response()
    }
}
