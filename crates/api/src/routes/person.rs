//! Route definitions for the `/persons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes mounted at `/persons`.
///
/// ```text
/// POST   /tree/{tree_id} -> create
/// GET    /tree/{tree_id} -> list_by_tree
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/tree/{tree_id}",
            get(person::list_by_tree).post(person::create),
        )
        .route(
            "/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
}
