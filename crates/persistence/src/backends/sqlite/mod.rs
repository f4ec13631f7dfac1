//! SQLite backend implementation.
//!
//! This module provides a SQLite implementation of [`PatientStorage`](crate::core::PatientStorage)
//! over an `r2d2` connection pool. It supports both in-memory databases (great
//! for testing) and file-based databases (for development and small
//! deployments).
//!
//! # Example
//!
//! ```no_run
//! use patients_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory database
//! let backend = SqliteBackend::in_memory()?;
//!
//! // Create the patients table
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE patients (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
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
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
