//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /profile -> get_profile
/// PUT /profile -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(user::get_profile).put(user::update_profile),
    )
}
