//! Core patient storage trait.
//!
//! This module defines the [`PatientStorage`] trait, the data access contract
//! the REST layer depends on. Every method executes exactly one statement of
//! the backend's [`QuerySet`](crate::query::QuerySet) on a pooled connection,
//! auto-committed, with no retry.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Patient, PatientInput};

/// CRUD storage for patient records.
///
/// Implementations share one connection pool across all concurrent callers;
/// each call acquires a connection, runs its statement, and releases the
/// connection before returning.
///
/// # Not found vs. failure
///
/// [`read`](Self::read) reports absence as `Ok(None)`. [`update`](Self::update)
/// and [`delete`](Self::delete) are single conditional statements: when no row
/// is affected they return [`StorageError::NotFound`](crate::error::StorageError::NotFound)
/// and leave the table untouched. Anything that goes wrong in the backend is a
/// [`StorageError::Backend`](crate::error::StorageError::Backend).
///
/// # Example
///
/// ```ignore
/// use patients_persistence::core::PatientStorage;
/// use patients_persistence::types::PatientInput;
///
/// async fn example<S: PatientStorage>(storage: &S) -> StorageResult<()> {
///     let created = storage
///         .create(PatientInput {
///             first_name: Some("Ada".to_string()),
///             ..Default::default()
///         })
///         .await?;
///
///     let read = storage.read(created.id()).await?;
///     assert_eq!(read, Some(created.clone()));
///
///     storage.delete(created.id()).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PatientStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every stored patient, ordered by id.
    ///
    /// An empty table yields an empty vector.
    async fn list(&self) -> StorageResult<Vec<Patient>>;

    /// Reads one patient by id.
    async fn read(&self, id: i64) -> StorageResult<Option<Patient>>;

    /// Inserts a patient and returns it with the storage-assigned id.
    ///
    /// No duplicate check is made; uniqueness is left to table constraints.
    async fn create(&self, input: PatientInput) -> StorageResult<Patient>;

    /// Overwrites every non-id field of an existing patient.
    ///
    /// Returns the submitted fields with the canonical id.
    ///
    /// # Errors
    ///
    /// * `StorageError::NotFound` - No row has this id
    /// * `StorageError::Backend` - The statement failed
    async fn update(&self, id: i64, input: PatientInput) -> StorageResult<Patient>;

    /// Removes a patient.
    ///
    /// # Errors
    ///
    /// * `StorageError::NotFound` - No row has this id
    /// * `StorageError::Backend` - The statement failed
    async fn delete(&self, id: i64) -> StorageResult<()>;
}
