//! Route definitions for the `/trees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::family_tree;
use crate::state::AppState;

/// Routes mounted at `/trees`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(family_tree::list).post(family_tree::create))
        .route(
            "/{id}",
            get(family_tree::get_by_id)
                .put(family_tree::update)
                .delete(family_tree::delete),
        )
}
