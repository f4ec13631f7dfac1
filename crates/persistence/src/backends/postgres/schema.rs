//! PostgreSQL schema definition.

use deadpool_postgres::Client;

use crate::error::{BackendError, StorageError, StorageResult};

/// Creates the `patients` table if it is missing.
pub async fn initialize_schema(client: &Client) -> StorageResult<()> {
    client
        .batch_execute(
            "CREATE TABLE IF NOT EXISTS patients (
                id BIGSERIAL PRIMARY KEY,
                first_name TEXT,
                last_name TEXT,
                email TEXT,
                address TEXT,
                diagnosis TEXT,
                phone TEXT,
                status TEXT,
                image_url TEXT
            );",
        )
        .await
        .map_err(|e| pg_error(format!("Failed to create patients table: {}", e)))?;

    Ok(())
}

fn pg_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "postgres".to_string(),
        message,
        source: None,
    })
}
