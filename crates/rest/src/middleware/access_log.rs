//! Access log middleware.
//!
//! Writes one `info` line per request before the handler runs, carrying the
//! method, the path, and the first two request headers.

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tracing::info;

/// Number of header lines included in each access log entry.
pub const LOGGED_HEADER_LINES: usize = 2;

/// Renders the first `count` headers as `name: value` lines.
///
/// Values that are not visible ASCII are written as `<binary>`.
pub fn leading_header_lines(headers: &HeaderMap, count: usize) -> Vec<String> {
    headers
        .iter()
        .take(count)
        .map(|(name, value)| {
            format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
        })
        .collect()
}

/// Middleware function for access logging.
///
/// This can be used with `axum::middleware::from_fn`.
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let headers = leading_header_lines(request.headers(), LOGGED_HEADER_LINES);
    info!(
        method = %request.method(),
        path = %request.uri().path(),
        headers = ?headers,
        "Request received"
    );

    next.run(request).await
}
