//! PatientStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

use crate::core::PatientStorage;
use crate::error::{StorageError, StorageResult};
use crate::query::Statement;
use crate::types::{Patient, PatientInput};

use super::SqliteBackend;

/// Maps a row selected with the id + eight patient columns.
fn row_to_patient(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        fields: PatientInput {
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            email: row.get(3)?,
            address: row.get(4)?,
            diagnosis: row.get(5)?,
            phone: row.get(6)?,
            status: row.get(7)?,
            image_url: row.get(8)?,
        },
    })
}

#[async_trait]
impl PatientStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self) -> StorageResult<Vec<Patient>> {
        let sql = self.queries().sql(Statement::SelectPatients);
        debug!(statement = %Statement::SelectPatients, "Executing statement");

        self.with_connection(move |conn| {
            let mut stmt = conn.prepare_cached(sql)?;
            let patients = stmt
                .query_map([], row_to_patient)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(patients)
        })
        .await
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Patient>> {
        let sql = self.queries().sql(Statement::SelectPatient);
        debug!(statement = %Statement::SelectPatient, id, "Executing statement");

        self.with_connection(move |conn| {
            let patient = conn
                .query_row(sql, params![id], row_to_patient)
                .optional()?;
            Ok(patient)
        })
        .await
    }

    async fn create(&self, input: PatientInput) -> StorageResult<Patient> {
        let sql = self.queries().sql(Statement::CreatePatient);
        debug!(statement = %Statement::CreatePatient, "Executing statement");

        self.with_connection(move |conn| {
            let [first_name, last_name, email, address, diagnosis, phone, status, image_url] =
                input.values();
            conn.execute(
                sql,
                params![
                    first_name, last_name, email, address, diagnosis, phone, status, image_url
                ],
            )?;
            let id = conn.last_insert_rowid();
            Ok(input.with_id(id))
        })
        .await
    }

    async fn update(&self, id: i64, input: PatientInput) -> StorageResult<Patient> {
        let sql = self.queries().sql(Statement::UpdatePatient);
        debug!(statement = %Statement::UpdatePatient, id, "Executing statement");

        self.with_connection(move |conn| {
            let [first_name, last_name, email, address, diagnosis, phone, status, image_url] =
                input.values();
            let affected = conn.execute(
                sql,
                params![
                    first_name, last_name, email, address, diagnosis, phone, status, image_url,
                    id
                ],
            )?;
            if affected == 0 {
                return Err(StorageError::NotFound { id });
            }
            Ok(input.with_id(id))
        })
        .await
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let sql = self.queries().sql(Statement::DeletePatient);
        debug!(statement = %Statement::DeletePatient, id, "Executing statement");

        self.with_connection(move |conn| {
            let affected = conn.execute(sql, params![id])?;
            if affected == 0 {
                return Err(StorageError::NotFound { id });
            }
            Ok(())
        })
        .await
    }
}
