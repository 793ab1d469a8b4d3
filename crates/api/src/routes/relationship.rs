//! Route definitions for the `/relationships` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::relationship;
use crate::state::AppState;

/// Routes mounted at `/relationships`.
///
/// ```text
/// POST   /                    -> create (primary + mirror in one transaction)
/// DELETE /{id}                -> delete (removes the mirror set too)
/// GET    /person/{person_id}  -> list_for_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(relationship::create))
        .route("/{id}", delete(relationship::delete))
        .route("/person/{person_id}", get(relationship::list_for_person))
}
