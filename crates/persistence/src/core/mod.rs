//! Core storage traits and abstractions.
//!
//! - [`PatientStorage`] - CRUD operations over the `patients` table
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use patients_persistence::core::PatientStorage;
//! use patients_persistence::error::StorageResult;
//! use patients_persistence::types::{Patient, PatientInput};
//!
//! struct MyBackend {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl PatientStorage for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn list(&self) -> StorageResult<Vec<Patient>> {
//!         // Implementation...
//!         todo!()
//!     }
//!
//!     // ... implement other required methods
//! }
//! ```

pub mod storage;

pub use storage::PatientStorage;
