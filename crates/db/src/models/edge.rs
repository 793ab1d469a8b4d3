//! Visual edge model and DTOs.
//!
//! Edges are presentation-only canvas connectors, distinct from semantic
//! relationships. `data` carries a rendering tag such as
//! `{"type": "spouse_connection"}` and is never interpreted server-side.

use genea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A visual edge row from the `edges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: DbId,
    pub source_id: DbId,
    pub target_id: DbId,
    pub kind: Option<String>,
    pub data: Option<serde_json::Value>,
    pub tree_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a visual edge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEdge {
    pub source_id: DbId,
    pub target_id: DbId,
    pub kind: Option<String>,
    pub data: Option<serde_json::Value>,
    pub tree_id: DbId,
}

/// DTO for updating a visual edge. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEdge {
    pub source_id: Option<DbId>,
    pub target_id: Option<DbId>,
    pub kind: Option<String>,
    pub data: Option<serde_json::Value>,
}
