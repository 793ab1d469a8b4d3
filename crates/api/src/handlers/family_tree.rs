//! Handlers for the `/trees` resource.
//!
//! Trees are the ownership boundary: reads are allowed for the owner or on
//! public trees, mutations for the owner only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use genea_core::error::CoreError;
use genea_core::types::DbId;
use genea_db::models::edge::Edge;
use genea_db::models::family_tree::{CreateFamilyTree, FamilyTree, UpdateFamilyTree};
use genea_db::models::node_position::NodePosition;
use genea_db::models::person::Person;
use genea_db::repositories::{EdgeRepo, FamilyTreeRepo, NodePositionRepo, PersonRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{Envelope, MessageResponse};
use crate::state::AppState;

/// Request body for `POST /trees`, validated before insert.
#[derive(Debug, serde::Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTreeRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// Full tree payload: the tree plus everything the canvas needs to render it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDetail {
    #[serde(flatten)]
    pub tree: FamilyTree,
    pub persons: Vec<Person>,
    pub node_positions: Vec<NodePosition>,
    pub edges: Vec<Edge>,
}

/// GET /api/v1/trees
///
/// List the authenticated user's trees, most recently updated first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Envelope<Vec<FamilyTree>>>> {
    let trees = FamilyTreeRepo::list_by_owner(&state.pool, auth_user.user_id).await?;
    Ok(Json(Envelope::new("trees", trees)))
}

/// GET /api/v1/trees/{id}
///
/// Return the tree with its persons, node positions, and visual edges.
/// Readable by the owner, or by anyone if the tree is public.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<TreeDetail>>> {
    let tree = find_tree(&state, id).await?;

    if tree.owner_id != auth_user.user_id && !tree.is_public {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have access to this tree".into(),
        )));
    }

    let persons = PersonRepo::list_by_tree(&state.pool, id).await?;
    let node_positions = NodePositionRepo::list_by_tree(&state.pool, id).await?;
    let edges = EdgeRepo::list_by_tree(&state.pool, id).await?;

    Ok(Json(Envelope::new(
        "tree",
        TreeDetail {
            tree,
            persons,
            node_positions,
            edges,
        },
    )))
}

/// POST /api/v1/trees
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateTreeRequest>,
) -> AppResult<(StatusCode, Json<Envelope<FamilyTree>>)> {
    input.validate()?;

    let tree = FamilyTreeRepo::create(
        &state.pool,
        auth_user.user_id,
        &CreateFamilyTree {
            name: input.name,
            description: input.description,
            is_public: input.is_public,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message("Tree created", "tree", tree)),
    ))
}

/// PUT /api/v1/trees/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFamilyTree>,
) -> AppResult<Json<Envelope<FamilyTree>>> {
    let tree = find_tree(&state, id).await?;
    require_owner(&tree, &auth_user)?;

    let updated = FamilyTreeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id,
        }))?;

    Ok(Json(Envelope::with_message("Tree updated", "tree", updated)))
}

/// DELETE /api/v1/trees/{id}
///
/// Cascades to the tree's persons, relationships, positions, and edges.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let tree = find_tree(&state, id).await?;
    require_owner(&tree, &auth_user)?;

    FamilyTreeRepo::delete(&state.pool, id).await?;

    Ok(Json(MessageResponse {
        message: "Tree deleted",
    }))
}

async fn find_tree(state: &AppState, id: DbId) -> Result<FamilyTree, AppError> {
    FamilyTreeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id,
        }))
}

fn require_owner(tree: &FamilyTree, auth_user: &AuthUser) -> Result<(), AppError> {
    if tree.owner_id != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner can modify this tree".into(),
        )));
    }
    Ok(())
}
