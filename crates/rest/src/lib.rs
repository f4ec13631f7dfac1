//! # patients-rest - Patients CRUD API
//!
//! This crate maps HTTP requests onto the patient storage operations of
//! `patients-persistence` and wraps every answer in a uniform response
//! envelope.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use patients_rest::{ServerConfig, create_app_with_config, serve};
//! use patients_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("patients.db")?;
//!     backend.init_schema()?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(backend, config.clone());
//!     serve(app, &config).await
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | welcome | GET | `/` | 200 |
//! | list | GET | `/patients` | 200 |
//! | create | POST | `/patients` | 201 |
//! | read | GET | `/patients/{id}` | 200 |
//! | update | PUT | `/patients/{id}` | 200 |
//! | delete | DELETE | `/patients/{id}` | 200 |
//!
//! Anything else is answered with 404 "You came to the wrong place. Go back".
//!
//! ## Response Envelope
//!
//! ```json
//! {
//!   "statusCode": 201,
//!   "httpStatus": "CREATED",
//!   "message": "Patient created",
//!   "timestamp": "Thu Oct 15 2026",
//!   "data": { "id": 1, "first_name": "Ada" }
//! }
//! ```
//!
//! ## Error Handling
//!
//! | HTTP Status | Message | Cause |
//! |-------------|---------|-------|
//! | 400 | Invalid request body | Body is not a patient JSON object |
//! | 404 | Patient not found | No row with that id |
//! | 404 | You came to the wrong place. Go back | No route matched |
//! | 500 | An error occurred | Storage failure (details are logged) |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their envelopes
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`middleware`] - Access logging
//! - [`extractors`] - Path id and request body extractors
//! - [`responses`] - The response envelope
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use patients_persistence::core::PatientStorage;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: PatientStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the routes, the access log, the body size limit,
/// CORS (when enabled), and HTTP tracing.
///
/// # Example
///
/// ```rust,ignore
/// use patients_rest::{create_app_with_config, ServerConfig};
/// use patients_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let app = create_app_with_config(backend, ServerConfig::for_testing());
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: PatientStorage + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let max_body_size = config.max_body_size;
    let enable_cors = config.enable_cors;

    // Create application state
    let state = AppState::new(Arc::new(storage), config);

    // Build the router with all patient routes
    let router = routing::create_routes(state)
        .layer(axum::middleware::from_fn(
            middleware::access_log_middleware,
        ))
        .layer(DefaultBodyLimit::max(max_body_size));

    // Add CORS if enabled
    let router = if enable_cors {
        router.layer(build_cors_layer())
    } else {
        router
    };

    router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Builds a CORS layer that allows any origin, method, and header.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Binds `host:port` from the configuration and serves `app` until ctrl-c.
pub async fn serve(app: Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level` when set. Calling this more than
/// once leaves the first subscriber in place.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "patients={level},patients_rest={level},patients_persistence={level},tower_http=debug"
        ))
    });

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
