//! PostgreSQL backend implementation.
//!
//! This module provides a PostgreSQL implementation of
//! [`PatientStorage`](crate::core::PatientStorage) with connection pooling via
//! deadpool-postgres.
//!
//! # Example
//!
//! ```no_run
//! use patients_persistence::backends::postgres::{PostgresBackend, PostgresConfig};
//!
//! # async fn main_example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PostgresConfig {
//!     host: "db.internal".to_string(),
//!     password: Some("secret".to_string()),
//!     ..Default::default()
//! };
//! let backend = PostgresBackend::new(config).await?;
//!
//! // Create the patients table
//! backend.init_schema().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS patients (
//!     id BIGSERIAL PRIMARY KEY,
//!     first_name TEXT,
//!     last_name TEXT,
//!     email TEXT,
//!     address TEXT,
//!     diagnosis TEXT,
//!     phone TEXT,
//!     status TEXT,
//!     image_url TEXT
//! );
//! ```

mod backend;
pub(crate) mod schema;
mod storage;

pub use backend::{PostgresBackend, PostgresConfig};
