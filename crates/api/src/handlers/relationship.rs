//! Handlers for the `/relationships` resource — the consistency engine.
//!
//! Kinship edges are stored as directed pairs: every create writes the
//! requested edge plus the mirror edge its kind requires, and every delete
//! removes the mirrors alongside the primary row. Both writes share one
//! transaction so a fault cannot leave the graph asymmetric.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use genea_core::error::CoreError;
use genea_core::types::DbId;
use genea_db::models::person::{Person, PersonRef};
use genea_db::models::relationship::{CreateRelationship, RelationshipWithPersons};
use genea_db::repositories::{PersonRepo, RelationshipRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{Envelope, MessageResponse};
use crate::state::AppState;

/// Tree membership guard: two persons may only be related when they belong
/// to the same tree. Checked on creation only; deletion trusts the stored
/// relationship's integrity.
fn ensure_same_tree(source: &Person, target: &Person) -> Result<(), AppError> {
    if source.tree_id != target.tree_id {
        return Err(AppError::Core(CoreError::Validation(
            "Both persons must belong to the same family tree".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/relationships
///
/// Creates the requested edge and its mirror in one transaction:
///
/// - `parent`/`child`: the opposite-kind reverse edge is written
///   unconditionally. This matches the reference behavior and can accumulate
///   duplicate mirror rows when the reverse edge already exists.
/// - `spouse`/`sibling`: the same-kind reverse edge is written only if it is
///   not already present, since a blind reverse insert would double up on
///   every create.
///
/// Only the primary edge is returned.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRelationship>,
) -> AppResult<(StatusCode, Json<Envelope<RelationshipWithPersons>>)> {
    let source = PersonRepo::find_by_id(&state.pool, input.source_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: input.source_id,
        }))?;
    let target = PersonRepo::find_by_id(&state.pool, input.target_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: input.target_id,
        }))?;

    ensure_same_tree(&source, &target)?;

    let mut tx = state.pool.begin().await?;

    let existing =
        RelationshipRepo::find_triple_in(&mut tx, input.kind, input.source_id, input.target_id)
            .await?;
    if existing.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "This relationship already exists".into(),
        )));
    }

    let primary =
        RelationshipRepo::create_in(&mut tx, input.kind, input.source_id, input.target_id).await?;

    let mirror = input.kind.mirror();
    if input.kind.is_symmetric() {
        let reverse =
            RelationshipRepo::find_triple_in(&mut tx, mirror, input.target_id, input.source_id)
                .await?;
        if reverse.is_none() {
            RelationshipRepo::create_in(&mut tx, mirror, input.target_id, input.source_id).await?;
        }
    } else {
        // No existence check, matching the reference behavior.
        RelationshipRepo::create_in(&mut tx, mirror, input.target_id, input.source_id).await?;
    }

    tx.commit().await?;

    let relationship = RelationshipWithPersons {
        id: primary.id,
        kind: primary.kind,
        source_id: primary.source_id,
        target_id: primary.target_id,
        created_at: primary.created_at,
        source: person_ref(&source),
        target: person_ref(&target),
    };

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            "Relationship created",
            "relationship",
            relationship,
        )),
    ))
}

/// DELETE /api/v1/relationships/{id}
///
/// Deletes the relationship and **all** rows matching its mirror triple
/// (inverse kind, reversed endpoints) — a set delete tolerating zero or
/// multiple mirrors. Rows whose stored kind is outside the registry are
/// deleted without mirror cleanup.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = state.pool.begin().await?;

    let relationship = RelationshipRepo::find_by_id_in(&mut tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Relationship",
            id,
        }))?;

    RelationshipRepo::delete_in(&mut tx, id).await?;

    if let Ok(kind) = relationship.kind() {
        let removed = RelationshipRepo::delete_triple_in(
            &mut tx,
            kind.mirror(),
            relationship.target_id,
            relationship.source_id,
        )
        .await?;
        tracing::debug!(id, mirrors_removed = removed, "Deleted relationship");
    }

    tx.commit().await?;

    Ok(Json(MessageResponse {
        message: "Relationship deleted",
    }))
}

/// GET /api/v1/relationships/person/{person_id}
///
/// Lists every relationship touching the person, each enriched with both
/// endpoint persons.
pub async fn list_for_person(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(person_id): Path<DbId>,
) -> AppResult<Json<Envelope<Vec<RelationshipWithPersons>>>> {
    PersonRepo::find_by_id(&state.pool, person_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: person_id,
        }))?;

    let relationships = RelationshipRepo::list_for_person(&state.pool, person_id).await?;
    Ok(Json(Envelope::new("relationships", relationships)))
}

fn person_ref(person: &Person) -> PersonRef {
    PersonRef {
        id: person.id,
        first_name: person.first_name.clone(),
        last_name: person.last_name.clone(),
        gender: person.gender.clone(),
        photo_url: person.photo_url.clone(),
    }
}
