//! Handlers for the `/node-positions` resource — the position ledger.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use genea_core::error::CoreError;
use genea_core::types::DbId;
use genea_db::models::node_position::{CreateNodePosition, NodePosition, UpdateNodePosition};
use genea_db::repositories::{FamilyTreeRepo, NodePositionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{Envelope, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/node-positions
///
/// Upsert: a request for an already-positioned node updates the existing row
/// in place rather than inserting a second one. Returns 201 either way.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateNodePosition>,
) -> AppResult<(StatusCode, Json<Envelope<NodePosition>>)> {
    FamilyTreeRepo::find_by_id(&state.pool, input.tree_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id: input.tree_id,
        }))?;

    let position = NodePositionRepo::upsert(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            "Node position created",
            "nodePosition",
            position,
        )),
    ))
}

/// PUT /api/v1/node-positions/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNodePosition>,
) -> AppResult<Json<Envelope<NodePosition>>> {
    let position = NodePositionRepo::update(&state.pool, id, input.x, input.y)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NodePosition",
            id,
        }))?;

    Ok(Json(Envelope::with_message(
        "Node position updated",
        "nodePosition",
        position,
    )))
}

/// GET /api/v1/node-positions/tree/{tree_id}
///
/// Bulk read used to seed canvas layout on tree load.
pub async fn list_by_tree(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tree_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<NodePosition>>>> {
    let positions = NodePositionRepo::list_by_tree(&state.pool, tree_id).await?;
    Ok(Json(Envelope::new("nodePositions", positions)))
}

/// DELETE /api/v1/node-positions/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = NodePositionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Node position deleted",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "NodePosition",
            id,
        }))
    }
}
