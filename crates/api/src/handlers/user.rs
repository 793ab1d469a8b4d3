//! Handlers for the `/users` resource (profile read and update).

use axum::extract::State;
use genea_core::error::CoreError;
use genea_db::models::user::{UpdateUser, User};
use genea_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Envelope<User>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(Envelope::new("user", user)))
}

/// PUT /api/v1/users/profile
///
/// Partial update of the authenticated user's name or email. Changing the
/// email to one already held by another account is a 409.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<Envelope<User>>> {
    if let Some(email) = &input.email {
        if let Some(existing) = UserRepo::find_by_email(&state.pool, email).await? {
            if existing.id != auth_user.user_id {
                return Err(AppError::Core(CoreError::Conflict(
                    "An account with this email already exists".into(),
                )));
            }
        }
    }

    let user = UserRepo::update(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(Envelope::with_message("Profile updated", "user", user)))
}
