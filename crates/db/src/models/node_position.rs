//! Node position model and DTOs.
//!
//! A node position is the persisted 2D canvas coordinate for a person node.
//! At most one live row exists per `node_id`; creates go through the ledger's
//! upsert rather than inserting blindly.

use genea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A node position row from the `node_positions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePosition {
    pub id: DbId,
    pub node_id: DbId,
    pub tree_id: DbId,
    pub x: f64,
    pub y: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the upsert endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNodePosition {
    pub node_id: DbId,
    pub tree_id: DbId,
    pub x: f64,
    pub y: f64,
}

/// DTO for updating a position row directly by its id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNodePosition {
    pub x: f64,
    pub y: f64,
}
