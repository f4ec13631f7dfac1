//! Axum middleware for the patients API.
//!
//! - [`access_log`] - One log line per incoming request

pub mod access_log;

pub use access_log::access_log_middleware;
