//! Repository for the `node_positions` table — the node position ledger.

use genea_core::types::DbId;
use sqlx::PgPool;

use crate::models::node_position::{CreateNodePosition, NodePosition};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, node_id, tree_id, x, y, created_at, updated_at";

/// Provides upsert-by-node and direct update access to canvas positions.
pub struct NodePositionRepo;

impl NodePositionRepo {
    /// Upsert a position for a node: if a row already exists for `node_id`
    /// (lookup is global, ignoring the tree), update its coordinates in
    /// place; otherwise insert a new row. Never produces a second row for
    /// the same node.
    pub async fn upsert(
        pool: &PgPool,
        input: &CreateNodePosition,
    ) -> Result<NodePosition, sqlx::Error> {
        let existing = Self::find_by_node(pool, input.node_id).await?;

        match existing {
            Some(position) => {
                let query = format!(
                    "UPDATE node_positions SET x = $2, y = $3, updated_at = NOW()
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, NodePosition>(&query)
                    .bind(position.id)
                    .bind(input.x)
                    .bind(input.y)
                    .fetch_one(pool)
                    .await
            }
            None => {
                let query = format!(
                    "INSERT INTO node_positions (node_id, tree_id, x, y)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, NodePosition>(&query)
                    .bind(input.node_id)
                    .bind(input.tree_id)
                    .bind(input.x)
                    .bind(input.y)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Find the live position row for a node, if any.
    pub async fn find_by_node(
        pool: &PgPool,
        node_id: DbId,
    ) -> Result<Option<NodePosition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM node_positions WHERE node_id = $1 LIMIT 1");
        sqlx::query_as::<_, NodePosition>(&query)
            .bind(node_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a position row directly by its id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        x: f64,
        y: f64,
    ) -> Result<Option<NodePosition>, sqlx::Error> {
        let query = format!(
            "UPDATE node_positions SET x = $2, y = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NodePosition>(&query)
            .bind(id)
            .bind(x)
            .bind(y)
            .fetch_optional(pool)
            .await
    }

    /// Bulk read of every position in a tree, used to seed canvas layout.
    pub async fn list_by_tree(
        pool: &PgPool,
        tree_id: DbId,
    ) -> Result<Vec<NodePosition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM node_positions WHERE tree_id = $1");
        sqlx::query_as::<_, NodePosition>(&query)
            .bind(tree_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a position row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM node_positions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
