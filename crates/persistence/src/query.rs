//! The fixed set of parameterized statements used against the `patients` table.
//!
//! Each backend owns one [`QuerySet`] written in its SQL dialect. Statements
//! bind the patient columns in [`PATIENT_COLUMNS`](crate::types::PATIENT_COLUMNS)
//! order, followed by the id where one is needed.

/// Identifies one statement of a [`QuerySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    /// Select every patient, ordered by id.
    SelectPatients,
    /// Select one patient by id.
    SelectPatient,
    /// Insert a patient; storage assigns the id.
    CreatePatient,
    /// Overwrite every non-id column of one patient.
    UpdatePatient,
    /// Remove one patient.
    DeletePatient,
}

impl Statement {
    /// All statements, in declaration order.
    pub const ALL: [Statement; 5] = [
        Statement::SelectPatients,
        Statement::SelectPatient,
        Statement::CreatePatient,
        Statement::UpdatePatient,
        Statement::DeletePatient,
    ];

    /// Returns a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Statement::SelectPatients => "select_patients",
            Statement::SelectPatient => "select_patient",
            Statement::CreatePatient => "create_patient",
            Statement::UpdatePatient => "update_patient",
            Statement::DeletePatient => "delete_patient",
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Five statement templates for one SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct QuerySet {
    /// See [`Statement::SelectPatients`].
    pub select_patients: &'static str,
    /// See [`Statement::SelectPatient`].
    pub select_patient: &'static str,
    /// See [`Statement::CreatePatient`].
    pub create_patient: &'static str,
    /// See [`Statement::UpdatePatient`].
    pub update_patient: &'static str,
    /// See [`Statement::DeletePatient`].
    pub delete_patient: &'static str,
}

impl QuerySet {
    /// Returns the SQL text for a statement.
    pub fn sql(&self, statement: Statement) -> &'static str {
        match statement {
            Statement::SelectPatients => self.select_patients,
            Statement::SelectPatient => self.select_patient,
            Statement::CreatePatient => self.create_patient,
            Statement::UpdatePatient => self.update_patient,
            Statement::DeletePatient => self.delete_patient,
        }
    }
}

/// SQLite dialect (`?N` placeholders). The inserted id is read back with
/// `last_insert_rowid()` on the same connection.
pub const SQLITE_QUERIES: QuerySet = QuerySet {
    select_patients: "SELECT id, first_name, last_name, email, address, diagnosis, phone, status, image_url
         FROM patients ORDER BY id",
    select_patient: "SELECT id, first_name, last_name, email, address, diagnosis, phone, status, image_url
         FROM patients WHERE id = ?1",
    create_patient: "INSERT INTO patients (first_name, last_name, email, address, diagnosis, phone, status, image_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    update_patient: "UPDATE patients SET first_name = ?1, last_name = ?2, email = ?3, address = ?4,
         diagnosis = ?5, phone = ?6, status = ?7, image_url = ?8 WHERE id = ?9",
    delete_patient: "DELETE FROM patients WHERE id = ?1",
};

/// PostgreSQL dialect (`$N` placeholders). The insert returns the assigned id.
pub const POSTGRES_QUERIES: QuerySet = QuerySet {
    select_patients: "SELECT id, first_name, last_name, email, address, diagnosis, phone, status, image_url
         FROM patients ORDER BY id",
    select_patient: "SELECT id, first_name, last_name, email, address, diagnosis, phone, status, image_url
         FROM patients WHERE id = $1",
    create_patient: "INSERT INTO patients (first_name, last_name, email, address, diagnosis, phone, status, image_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
    update_patient: "UPDATE patients SET first_name = $1, last_name = $2, email = $3, address = $4,
         diagnosis = $5, phone = $6, status = $7, image_url = $8 WHERE id = $9",
    delete_patient: "DELETE FROM patients WHERE id = $1",
};
