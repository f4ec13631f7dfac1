//! PatientStorage implementation for PostgreSQL.

use async_trait::async_trait;
use tokio_postgres::Row;
use tracing::debug;

use crate::core::PatientStorage;
use crate::error::{StorageError, StorageResult};
use crate::query::Statement;
use crate::types::{Patient, PatientInput};

use super::PostgresBackend;

fn row_to_patient(row: &Row) -> Result<Patient, tokio_postgres::Error> {
    Ok(Patient {
        id: row.try_get(0)?,
        fields: PatientInput {
            first_name: row.try_get(1)?,
            last_name: row.try_get(2)?,
            email: row.try_get(3)?,
            address: row.try_get(4)?,
            diagnosis: row.try_get(5)?,
            phone: row.try_get(6)?,
            status: row.try_get(7)?,
            image_url: row.try_get(8)?,
        },
    })
}

#[async_trait]
impl PatientStorage for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> StorageResult<Vec<Patient>> {
        debug!(statement = %Statement::SelectPatients, "Executing statement");
        let client = self.get_client().await?;

        let rows = client
            .query(self.queries().sql(Statement::SelectPatients), &[])
            .await?;
        let patients = rows
            .iter()
            .map(row_to_patient)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(patients)
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Patient>> {
        debug!(statement = %Statement::SelectPatient, id, "Executing statement");
        let client = self.get_client().await?;

        let row = client
            .query_opt(self.queries().sql(Statement::SelectPatient), &[&id])
            .await?;
        match row {
            Some(row) => Ok(Some(row_to_patient(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, input: PatientInput) -> StorageResult<Patient> {
        debug!(statement = %Statement::CreatePatient, "Executing statement");
        let client = self.get_client().await?;

        let [first_name, last_name, email, address, diagnosis, phone, status, image_url] =
            input.values();
        let row = client
            .query_one(
                self.queries().sql(Statement::CreatePatient),
                &[
                    &first_name,
                    &last_name,
                    &email,
                    &address,
                    &diagnosis,
                    &phone,
                    &status,
                    &image_url,
                ],
            )
            .await?;
        let id: i64 = row.try_get(0)?;

        Ok(input.with_id(id))
    }

    async fn update(&self, id: i64, input: PatientInput) -> StorageResult<Patient> {
        debug!(statement = %Statement::UpdatePatient, id, "Executing statement");
        let client = self.get_client().await?;

        let [first_name, last_name, email, address, diagnosis, phone, status, image_url] =
            input.values();
        let affected = client
            .execute(
                self.queries().sql(Statement::UpdatePatient),
                &[
                    &first_name,
                    &last_name,
                    &email,
                    &address,
                    &diagnosis,
                    &phone,
                    &status,
                    &image_url,
                    &id,
                ],
            )
            .await?;
        if affected == 0 {
            return Err(StorageError::NotFound { id });
        }

        Ok(input.with_id(id))
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        debug!(statement = %Statement::DeletePatient, id, "Executing statement");
        let client = self.get_client().await?;

        let affected = client
            .execute(self.queries().sql(Statement::DeletePatient), &[&id])
            .await?;
        if affected == 0 {
            return Err(StorageError::NotFound { id });
        }

        Ok(())
    }
}
