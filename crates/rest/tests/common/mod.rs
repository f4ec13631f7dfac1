//! Shared test infrastructure for REST API integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::{TestResponse, TestServer};
use patients_persistence::backends::sqlite::SqliteBackend;
use patients_persistence::core::PatientStorage;
use patients_persistence::error::{BackendError, StorageError, StorageResult};
use patients_persistence::types::{Patient, PatientInput};
use patients_rest::responses::Envelope;
use patients_rest::{ServerConfig, create_app_with_config};
use serde_json::{Value, json};

/// Creates a test server over a fresh in-memory SQLite database.
///
/// The returned backend shares its pool with the server, so tests can seed
/// and inspect rows directly.
pub fn create_test_server() -> (TestServer, SqliteBackend) {
    create_test_server_with_config(ServerConfig::for_testing())
}

/// Creates a test server over in-memory SQLite with a custom configuration.
pub fn create_test_server_with_config(config: ServerConfig) -> (TestServer, SqliteBackend) {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");

    let app = create_app_with_config(backend.clone(), config);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Creates a test server whose storage fails every call.
pub fn create_failing_server() -> TestServer {
    let app = create_app_with_config(FailingStorage, ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}

/// The detail every [`FailingStorage`] error carries.
pub const FAILURE_DETAIL: &str = "relation \"patients\" does not exist";

/// Storage that fails every operation with a backend error.
pub struct FailingStorage;

impl FailingStorage {
    fn failure<T>() -> StorageResult<T> {
        Err(StorageError::Backend(BackendError::QueryError {
            message: FAILURE_DETAIL.to_string(),
        }))
    }
}

#[async_trait]
impl PatientStorage for FailingStorage {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn list(&self) -> StorageResult<Vec<Patient>> {
        Self::failure()
    }

    async fn read(&self, _id: i64) -> StorageResult<Option<Patient>> {
        Self::failure()
    }

    async fn create(&self, _input: PatientInput) -> StorageResult<Patient> {
        Self::failure()
    }

    async fn update(&self, _id: i64, _input: PatientInput) -> StorageResult<Patient> {
        Self::failure()
    }

    async fn delete(&self, _id: i64) -> StorageResult<()> {
        Self::failure()
    }
}

/// A complete patient body.
pub fn patient_json(first_name: &str, last_name: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": last_name,
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "address": "12 Harbour Street",
        "diagnosis": "Fractured wrist",
        "phone": "555-0134",
        "status": "admitted",
        "image_url": "https://example.com/photo.png"
    })
}

/// Seeds a patient directly through storage and returns its id.
pub async fn seed_patient(backend: &SqliteBackend, first_name: &str, last_name: &str) -> i64 {
    let input: PatientInput =
        serde_json::from_value(patient_json(first_name, last_name)).expect("valid patient");
    backend
        .create(input)
        .await
        .expect("Failed to seed patient")
        .id()
}

/// Parses a response body as an envelope.
pub fn envelope(response: &TestResponse) -> Envelope<Value> {
    response.json::<Envelope<Value>>()
}

/// Asserts the envelope's status fields and message.
pub fn assert_envelope(response: &TestResponse, status_code: u16, http_status: &str, message: &str) {
    let body: Value = response.json();
    assert_eq!(body["statusCode"], status_code, "body: {}", body);
    assert_eq!(body["httpStatus"], http_status, "body: {}", body);
    assert_eq!(body["message"], message, "body: {}", body);
    assert!(
        body["timestamp"].as_str().is_some_and(|t| !t.is_empty()),
        "missing timestamp: {}",
        body
    );
}
