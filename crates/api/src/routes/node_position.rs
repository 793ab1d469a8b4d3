//! Route definitions for the `/node-positions` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::node_position;
use crate::state::AppState;

/// Routes mounted at `/node-positions`.
///
/// ```text
/// POST   /                -> create (upsert keyed by node_id)
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /tree/{tree_id}  -> list_by_tree
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(node_position::create))
        .route(
            "/{id}",
            put(node_position::update).delete(node_position::delete),
        )
        .route("/tree/{tree_id}", get(node_position::list_by_tree))
}
