//! Patients API integration tests.
//!
//! Exercises every route through the full application stack (access log,
//! body limit, routing, handlers, envelopes) over in-memory SQLite.

mod common;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use common::*;
use patients_persistence::core::PatientStorage;
use patients_rest::ServerConfig;
use patients_rest::responses::HttpStatus;
use serde_json::{Value, json};

const ORIGIN: HeaderName = HeaderName::from_static("origin");

// =============================================================================
// Root and Fallback Tests
// =============================================================================

mod routing {
    use super::*;

    #[tokio::test]
    async fn test_root_welcome() {
        let (server, _backend) = create_test_server();

        let response = server.get("/").await;

        response.assert_status_ok();
        assert_envelope(&response, 200, "OK", "Welcome to the patients API");
        assert!(envelope(&response).data.is_none());
    }

    #[tokio::test]
    async fn test_unknown_path_is_wrong_place() {
        let (server, _backend) = create_test_server();

        for path in ["/doctors", "/patients/1/notes", "/api/patients"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            assert_envelope(
                &response,
                404,
                "NOT_FOUND",
                "You came to the wrong place. Go back",
            );
        }
    }

    #[tokio::test]
    async fn test_unsupported_method_is_wrong_place() {
        let (server, _backend) = create_test_server();

        let response = server.patch("/patients/1").json(&json!({})).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(
            &response,
            404,
            "NOT_FOUND",
            "You came to the wrong place. Go back",
        );

        let response = server.delete("/patients").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(
            &response,
            404,
            "NOT_FOUND",
            "You came to the wrong place. Go back",
        );

        let response = server.method(Method::POST, "/").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_trailing_slash_reaches_patient_routes() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;

        let response = server.get("/patients/").await;
        response.assert_status_ok();
        assert_envelope(&response, 200, "OK", "Patients retrieved");
        assert_eq!(envelope(&response).data.unwrap().as_array().unwrap().len(), 1);

        let response = server.get(&format!("/patients/{}/", id)).await;
        response.assert_status_ok();
        assert_envelope(&response, 200, "OK", "Patient retrieved");
        assert_eq!(envelope(&response).data.unwrap()["id"], id);

        let response = server.patch("/patients/").json(&json!({})).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(
            &response,
            404,
            "NOT_FOUND",
            "You came to the wrong place. Go back",
        );
    }
}

// =============================================================================
// List Tests
// =============================================================================

mod list {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_returns_empty_list() {
        let (server, _backend) = create_test_server();

        let response = server.get("/patients").await;

        response.assert_status_ok();
        assert_envelope(&response, 200, "OK", "Patients retrieved");
        assert_eq!(envelope(&response).data, Some(json!([])));
    }

    #[tokio::test]
    async fn test_lists_every_patient() {
        let (server, backend) = create_test_server();
        let first = seed_patient(&backend, "Ada", "Lovelace").await;
        let second = seed_patient(&backend, "Grace", "Hopper").await;

        let response = server.get("/patients").await;

        response.assert_status_ok();
        let data = envelope(&response).data.unwrap();
        let patients = data.as_array().unwrap();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0]["id"], first);
        assert_eq!(patients[1]["id"], second);
        assert_eq!(patients[1]["last_name"], "Hopper");
    }
}

// =============================================================================
// Read Tests
// =============================================================================

mod read {
    use super::*;

    #[tokio::test]
    async fn test_read_existing_patient() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;

        let response = server.get(&format!("/patients/{}", id)).await;

        response.assert_status_ok();
        assert_envelope(&response, 200, "OK", "Patient retrieved");
        let data = envelope(&response).data.unwrap();
        assert!(data.is_object());
        assert_eq!(data["id"], id);
        assert_eq!(data["first_name"], "Ada");
        assert_eq!(data["image_url"], "https://example.com/photo.png");
    }

    #[tokio::test]
    async fn test_read_missing_patient() {
        let (server, _backend) = create_test_server();

        let response = server.get("/patients/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(&response, 404, "NOT_FOUND", "Patient not found");
        assert!(envelope(&response).data.is_none());
    }

    #[tokio::test]
    async fn test_read_non_integer_id() {
        let (server, _backend) = create_test_server();

        let response = server.get("/patients/abc").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(&response, 404, "NOT_FOUND", "Patient not found");
    }
}

// =============================================================================
// Create Tests
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_id() {
        let (server, _backend) = create_test_server();
        let body = patient_json("Ada", "Lovelace");

        let response = server.post("/patients").json(&body).await;

        response.assert_status(StatusCode::CREATED);
        assert_envelope(&response, 201, "CREATED", "Patient created");

        let data = envelope(&response).data.unwrap();
        assert!(data["id"].as_i64().is_some_and(|id| id > 0));
        for (field, value) in body.as_object().unwrap() {
            assert_eq!(&data[field], value, "field {}", field);
        }
    }

    #[tokio::test]
    async fn test_create_then_read_round_trip() {
        let (server, _backend) = create_test_server();
        let body = patient_json("Grace", "Hopper");

        let created = server.post("/patients").json(&body).await;
        let id = envelope(&created).data.unwrap()["id"].as_i64().unwrap();

        let fetched = server.get(&format!("/patients/{}", id)).await;
        fetched.assert_status_ok();
        let mut expected = body.clone();
        expected["id"] = json!(id);
        assert_eq!(envelope(&fetched).data, Some(expected));
    }

    #[tokio::test]
    async fn test_create_ignores_client_id_and_unknown_fields() {
        let (server, backend) = create_test_server();

        let response = server
            .post("/patients")
            .json(&json!({"id": 500, "last_name": "Curie", "ward": "B"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let data = envelope(&response).data.unwrap();
        assert_ne!(data["id"], 500);
        assert!(data.get("ward").is_none());
        assert!(data.get("first_name").is_none());

        let stored = backend.read(data["id"].as_i64().unwrap()).await.unwrap();
        assert_eq!(stored.unwrap().fields.last_name.as_deref(), Some("Curie"));
    }

    #[tokio::test]
    async fn test_duplicate_creates_are_both_stored() {
        let (server, backend) = create_test_server();
        let body = patient_json("Ada", "Lovelace");

        server.post("/patients").json(&body).await.assert_status(StatusCode::CREATED);
        server.post("/patients").json(&body).await.assert_status(StatusCode::CREATED);

        assert_eq!(backend.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (server, backend) = create_test_server();

        let response = server
            .post("/patients")
            .content_type("application/json")
            .bytes(Bytes::from_static(b"{\"first_name\": "))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_envelope(&response, 400, "BAD_REQUEST", "Invalid request body");
        assert!(!response.text().contains("EOF"));
        assert!(backend.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        let (server, _backend) = create_test_server();

        let response = server
            .post("/patients")
            .json(&json!({"first_name": ["Ada"]}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_envelope(&response, 400, "BAD_REQUEST", "Invalid request body");
    }

    #[tokio::test]
    async fn test_non_object_body_is_bad_request() {
        let (server, backend) = create_test_server();

        for body in [json!([]), json!(["Ada", "Lovelace"])] {
            let response = server.post("/patients").json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            assert_envelope(&response, 400, "BAD_REQUEST", "Invalid request body");
        }

        assert!(backend.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_body_is_bad_request() {
        let config = ServerConfig {
            max_body_size: 32,
            ..ServerConfig::for_testing()
        };
        let (server, backend) = create_test_server_with_config(config);

        let response = server.post("/patients").json(&patient_json("Ada", "Lovelace")).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_envelope(&response, 400, "BAD_REQUEST", "Invalid request body");
        assert!(backend.list().await.unwrap().is_empty());
    }
}

// =============================================================================
// Update Tests
// =============================================================================

mod update {
    use super::*;

    #[tokio::test]
    async fn test_update_existing_patient() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;
        let body = json!({"first_name": "Augusta", "status": "discharged"});

        let response = server.put(&format!("/patients/{}", id)).json(&body).await;

        response.assert_status_ok();
        assert_envelope(&response, 200, "OK", "Patient updated");
        assert_eq!(
            envelope(&response).data,
            Some(json!({"id": id, "first_name": "Augusta", "status": "discharged"}))
        );

        let stored = backend.read(id).await.unwrap().unwrap();
        assert_eq!(stored.fields.first_name.as_deref(), Some("Augusta"));
        assert_eq!(stored.fields.status.as_deref(), Some("discharged"));
        assert!(stored.fields.last_name.is_none());
    }

    #[tokio::test]
    async fn test_update_id_is_an_integer() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;

        let response = server
            .put(&format!("/patients/{}", id))
            .json(&patient_json("Ada", "King"))
            .await;

        let data = envelope(&response).data.unwrap();
        assert!(data["id"].is_i64());
        assert_eq!(data["id"], id);
    }

    #[tokio::test]
    async fn test_update_missing_patient_leaves_store_unchanged() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;
        let before = backend.list().await.unwrap();

        let response = server
            .put(&format!("/patients/{}", id + 1))
            .json(&patient_json("Grace", "Hopper"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(&response, 404, "NOT_FOUND", "Patient not found");
        assert_eq!(backend.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_non_integer_id() {
        let (server, _backend) = create_test_server();

        let response = server
            .put("/patients/first")
            .json(&patient_json("Grace", "Hopper"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(&response, 404, "NOT_FOUND", "Patient not found");
    }

    #[tokio::test]
    async fn test_update_with_bad_body() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;

        let response = server
            .put(&format!("/patients/{}", id))
            .content_type("application/json")
            .bytes(Bytes::from_static(b"not json"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let stored = backend.read(id).await.unwrap().unwrap();
        assert_eq!(stored.fields.last_name.as_deref(), Some("Lovelace"));
    }

    #[tokio::test]
    async fn test_update_with_array_body() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;

        let response = server
            .put(&format!("/patients/{}", id))
            .json(&json!(["Grace", "Hopper"]))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_envelope(&response, 400, "BAD_REQUEST", "Invalid request body");
        let stored = backend.read(id).await.unwrap().unwrap();
        assert_eq!(stored.fields.first_name.as_deref(), Some("Ada"));
        assert_eq!(stored.fields.last_name.as_deref(), Some("Lovelace"));
    }
}

// =============================================================================
// Delete Tests
// =============================================================================

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_existing_patient() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;

        let response = server.delete(&format!("/patients/{}", id)).await;

        response.assert_status_ok();
        assert_envelope(&response, 200, "OK", "Patient deleted");
        assert!(envelope(&response).data.is_none());
        assert!(backend.read(id).await.unwrap().is_none());

        server
            .get(&format!("/patients/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let (server, backend) = create_test_server();
        let id = seed_patient(&backend, "Ada", "Lovelace").await;

        server
            .delete(&format!("/patients/{}", id))
            .await
            .assert_status_ok();
        let response = server.delete(&format!("/patients/{}", id)).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_envelope(&response, 404, "NOT_FOUND", "Patient not found");
    }

    #[tokio::test]
    async fn test_delete_missing_patient_leaves_store_unchanged() {
        let (server, backend) = create_test_server();
        seed_patient(&backend, "Ada", "Lovelace").await;

        let response = server.delete("/patients/4242").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(backend.list().await.unwrap().len(), 1);
    }
}

// =============================================================================
// Storage Failure Tests
// =============================================================================

mod failures {
    use super::*;

    fn assert_generic_failure(response: &axum_test::TestResponse) {
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_envelope(
            response,
            500,
            HttpStatus::InternalServerError.as_str(),
            "An error occurred",
        );
        let text = response.text();
        assert!(!text.contains("relation"), "leaked detail: {}", text);
        assert!(!text.contains("does not exist"), "leaked detail: {}", text);
    }

    #[tokio::test]
    async fn test_every_operation_degrades_to_500() {
        let server = create_failing_server();
        let body = patient_json("Ada", "Lovelace");

        assert_generic_failure(&server.get("/patients").await);
        assert_generic_failure(&server.get("/patients/1").await);
        assert_generic_failure(&server.post("/patients").json(&body).await);
        assert_generic_failure(&server.put("/patients/1").json(&body).await);
        assert_generic_failure(&server.delete("/patients/1").await);
    }

    #[tokio::test]
    async fn test_missing_table_is_500() {
        let backend = patients_persistence::backends::sqlite::SqliteBackend::in_memory().unwrap();
        let app = patients_rest::create_app_with_config(backend, ServerConfig::for_testing());
        let server = axum_test::TestServer::new(app).unwrap();

        let response = server.get("/patients").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "An error occurred");
        assert!(!response.text().contains("no such table"));
    }

    #[tokio::test]
    async fn test_failures_do_not_affect_routing() {
        let server = create_failing_server();

        let response = server.get("/").await;
        response.assert_status_ok();

        let response = server.get("/patients/not-a-number").await;
        assert_envelope(&response, 404, "NOT_FOUND", "Patient not found");
    }
}

// =============================================================================
// Middleware Tests
// =============================================================================

mod middleware {
    use super::*;

    #[tokio::test]
    async fn test_cors_headers_when_enabled() {
        let config = ServerConfig {
            enable_cors: true,
            ..ServerConfig::for_testing()
        };
        let (server, _backend) = create_test_server_with_config(config);

        let response = server
            .get("/patients")
            .add_header(ORIGIN, HeaderValue::from_static("https://dashboard.example.com"))
            .await;

        response.assert_status_ok();
        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin")
        );
    }

    #[tokio::test]
    async fn test_envelope_timestamp_format() {
        let (server, _backend) = create_test_server();

        let response = server.get("/").await;
        let timestamp = envelope(&response).timestamp;

        // e.g. "Thu Oct 15 2026"
        let parts: Vec<&str> = timestamp.split(' ').collect();
        assert_eq!(parts.len(), 4, "timestamp: {}", timestamp);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 2);
        assert_eq!(parts[3].len(), 4);
    }
}
