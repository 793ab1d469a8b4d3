//! Route definitions for the `/edges` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::edge;
use crate::state::AppState;

/// Routes mounted at `/edges`.
///
/// ```text
/// POST   /                -> create
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /tree/{tree_id}  -> list_by_tree
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(edge::create))
        .route("/{id}", put(edge::update).delete(edge::delete))
        .route("/tree/{tree_id}", get(edge::list_by_tree))
}
