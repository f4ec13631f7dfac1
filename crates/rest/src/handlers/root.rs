//! Welcome and fallback handlers.

use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::error::RestError;
use crate::responses::{Envelope, HttpStatus};

/// Handler for `GET /`.
pub async fn root_handler() -> Response {
    Envelope::new(HttpStatus::Ok, "Welcome to the patients API").into_response()
}

/// Handler for any method and path no route accepts.
pub async fn fallback_handler(method: axum::http::Method, uri: axum::http::Uri) -> Response {
    debug!(method = %method, path = %uri.path(), "No route matched");
    RestError::RouteNotFound.into_response()
}
