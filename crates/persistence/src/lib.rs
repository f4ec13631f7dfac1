//! Patients API Persistence Layer
//!
//! This crate stores patient records in a single relational table and exposes
//! them through the [`PatientStorage`] trait. Backends are selected with
//! feature flags; each owns a connection pool that is created once and shared
//! by every caller.
//!
//! # Backend Features
//!
//! ```toml
//! [dependencies]
//! patients-persistence = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `postgres` - PostgreSQL via deadpool-postgres
//!
//! # Architecture
//!
//! - [`types`] - Patient record types
//! - [`query`] - The fixed statement set, one per SQL dialect
//! - [`core`] - The storage trait
//! - [`error`] - Error types for all operations
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use patients_persistence::backends::sqlite::SqliteBackend;
//! use patients_persistence::{PatientInput, PatientStorage};
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let created = backend
//!     .create(PatientInput {
//!         first_name: Some("Ada".to_string()),
//!         last_name: Some("Lovelace".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let fetched = backend.read(created.id()).await?;
//! assert_eq!(fetched, Some(created));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types at crate root
pub use core::PatientStorage;
pub use error::{BackendError, StorageError, StorageResult};
pub use types::{Patient, PatientInput};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
