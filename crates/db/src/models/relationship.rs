//! Relationship (kinship edge) model and DTOs.

use genea_core::relationship::RelationshipKind;
use genea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::person::PersonRef;

/// A relationship row from the `relationships` table.
///
/// `kind` is stored as lowercase text; rows written by this application always
/// hold one of the four registry kinds (the schema CHECK enforces it).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: DbId,
    /// Serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub source_id: DbId,
    pub target_id: DbId,
    pub created_at: Timestamp,
}

impl Relationship {
    /// Parse the stored kind into the registry enum.
    pub fn kind(&self) -> Result<RelationshipKind, genea_core::relationship::UnknownKind> {
        self.kind.parse()
    }
}

/// A relationship enriched with both endpoint persons, as returned by the
/// list-by-person endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipWithPersons {
    pub id: DbId,
    /// Serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub source_id: DbId,
    pub target_id: DbId,
    pub created_at: Timestamp,
    pub source: PersonRef,
    pub target: PersonRef,
}

/// DTO for creating a relationship. The kind is validated at the serde
/// boundary; an unrecognized kind never reaches the engine.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationship {
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
    pub source_id: DbId,
    pub target_id: DbId,
}
