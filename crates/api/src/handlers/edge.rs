//! Handlers for the `/edges` resource (visual canvas connectors).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use genea_core::error::CoreError;
use genea_core::types::DbId;
use genea_db::models::edge::{CreateEdge, Edge, UpdateEdge};
use genea_db::repositories::{EdgeRepo, FamilyTreeRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{Envelope, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/edges
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateEdge>,
) -> AppResult<(StatusCode, Json<Envelope<Edge>>)> {
    FamilyTreeRepo::find_by_id(&state.pool, input.tree_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id: input.tree_id,
        }))?;

    let edge = EdgeRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message("Edge created", "edge", edge)),
    ))
}

/// GET /api/v1/edges/tree/{tree_id}
pub async fn list_by_tree(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tree_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<Edge>>>> {
    let edges = EdgeRepo::list_by_tree(&state.pool, tree_id).await?;
    Ok(Json(Envelope::new("edges", edges)))
}

/// PUT /api/v1/edges/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEdge>,
) -> AppResult<Json<Envelope<Edge>>> {
    let edge = EdgeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Edge", id }))?;

    Ok(Json(Envelope::with_message("Edge updated", "edge", edge)))
}

/// DELETE /api/v1/edges/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = EdgeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Edge deleted",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Edge", id }))
    }
}
