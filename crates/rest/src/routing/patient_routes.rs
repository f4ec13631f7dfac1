//! Patient route configuration.
//!
//! Defines all routes for the patients API.

use axum::{
    Router,
    routing::{MethodRouter, get},
};
use patients_persistence::core::PatientStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all patients API routes.
///
/// # Routes
///
/// - `GET /` - Welcome message
/// - `GET /patients` - List
/// - `POST /patients` - Create
/// - `GET /patients/{id}` - Read
/// - `PUT /patients/{id}` - Update
/// - `DELETE /patients/{id}` - Delete
///
/// `/patients/` and `/patients/{id}/` are served by the same handlers as
/// their unslashed forms.
///
/// Any other path, or any other method on a known path, is answered by
/// [`handlers::fallback_handler`] with a 404 envelope.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientStorage + 'static,
{
    let collection = collection_routes::<S>();
    let item = item_routes::<S>();

    Router::new()
        .route(
            "/",
            get(handlers::root_handler).fallback(handlers::fallback_handler),
        )
        .route("/patients", collection.clone())
        .route("/patients/", collection)
        .route("/patients/{id}", item.clone())
        .route("/patients/{id}/", item)
        .fallback(handlers::fallback_handler)
        .with_state(state)
}

fn collection_routes<S>() -> MethodRouter<AppState<S>>
where
    S: PatientStorage + 'static,
{
    get(handlers::list_handler::<S>)
        .post(handlers::create_handler::<S>)
        .fallback(handlers::fallback_handler)
}

fn item_routes<S>() -> MethodRouter<AppState<S>>
where
    S: PatientStorage + 'static,
{
    get(handlers::read_handler::<S>)
        .put(handlers::update_handler::<S>)
        .delete(handlers::delete_handler::<S>)
        .fallback(handlers::fallback_handler)
}
