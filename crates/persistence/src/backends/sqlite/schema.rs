//! SQLite schema definition.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Creates the `patients` table if it is missing.
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS patients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
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
    .map_err(|e| {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: format!("Failed to create patients table: {}", e),
            source: None,
        })
    })?;

    Ok(())
}
