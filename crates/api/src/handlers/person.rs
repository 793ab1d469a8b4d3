//! Handlers for the `/persons` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use genea_core::error::CoreError;
use genea_core::types::DbId;
use genea_db::models::person::{CreatePerson, Person, UpdatePerson};
use genea_db::models::relationship::RelationshipWithPersons;
use genea_db::repositories::{FamilyTreeRepo, PersonRepo, RelationshipRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{Envelope, MessageResponse};
use crate::state::AppState;

/// Accepted values for the `gender` field.
const GENDERS: [&str; 3] = ["male", "female", "other"];

/// Person payload enriched with the relationships they participate in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetail {
    #[serde(flatten)]
    pub person: Person,
    pub relationships: Vec<RelationshipWithPersons>,
}

/// POST /api/v1/persons/tree/{tree_id}
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tree_id): Path<DbId>,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<Envelope<Person>>)> {
    input.validate()?;
    check_gender(input.gender.as_deref())?;

    FamilyTreeRepo::find_by_id(&state.pool, tree_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id: tree_id,
        }))?;

    let person = PersonRepo::create(&state.pool, tree_id, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message("Person created", "person", person)),
    ))
}

/// GET /api/v1/persons/tree/{tree_id}
pub async fn list_by_tree(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(tree_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<Person>>>> {
    FamilyTreeRepo::find_by_id(&state.pool, tree_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id: tree_id,
        }))?;

    let persons = PersonRepo::list_by_tree(&state.pool, tree_id).await?;
    Ok(Json(Envelope::new("persons", persons)))
}

/// GET /api/v1/persons/{id}
///
/// Returns the person together with all relationships they are the source
/// or target of, each enriched with both endpoints.
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<PersonDetail>>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;

    let relationships = RelationshipRepo::list_for_person(&state.pool, id).await?;

    Ok(Json(Envelope::new(
        "person",
        PersonDetail {
            person,
            relationships,
        },
    )))
}

/// PUT /api/v1/persons/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<Envelope<Person>>> {
    check_gender(input.gender.as_deref())?;

    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;

    Ok(Json(Envelope::with_message("Person updated", "person", person)))
}

/// DELETE /api/v1/persons/{id}
///
/// Cascades to the person's relationships, node position, and edges.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = PersonRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Person deleted",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
    }
}

fn check_gender(gender: Option<&str>) -> Result<(), AppError> {
    match gender {
        Some(g) if !GENDERS.contains(&g) => Err(AppError::Core(CoreError::Validation(
            "gender must be one of male, female, other".into(),
        ))),
        _ => Ok(()),
    }
}
