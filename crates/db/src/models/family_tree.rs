//! Family tree model and DTOs.
//!
//! A tree is the ownership boundary: it owns its persons, relationships,
//! node positions, and visual edges, all of which cascade on delete.

use genea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A family tree row from the `family_trees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyTree {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new family tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyTree {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to private if omitted.
    pub is_public: Option<bool>,
}

/// DTO for updating an existing family tree. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFamilyTree {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}
