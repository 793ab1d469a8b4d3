//! Repository for the `edges` table (visual canvas connectors).

use genea_core::types::DbId;
use sqlx::PgPool;

use crate::models::edge::{CreateEdge, Edge, UpdateEdge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, source_id, target_id, kind, data, tree_id, created_at";

/// Provides CRUD operations for visual edges.
pub struct EdgeRepo;

impl EdgeRepo {
    /// Insert a new visual edge, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEdge) -> Result<Edge, sqlx::Error> {
        let query = format!(
            "INSERT INTO edges (source_id, target_id, kind, data, tree_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Edge>(&query)
            .bind(input.source_id)
            .bind(input.target_id)
            .bind(&input.kind)
            .bind(&input.data)
            .bind(input.tree_id)
            .fetch_one(pool)
            .await
    }

    /// Find a visual edge by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Edge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM edges WHERE id = $1");
        sqlx::query_as::<_, Edge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all visual edges of a tree.
    pub async fn list_by_tree(pool: &PgPool, tree_id: DbId) -> Result<Vec<Edge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM edges WHERE tree_id = $1");
        sqlx::query_as::<_, Edge>(&query)
            .bind(tree_id)
            .fetch_all(pool)
            .await
    }

    /// Update a visual edge. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEdge,
    ) -> Result<Option<Edge>, sqlx::Error> {
        let query = format!(
            "UPDATE edges SET
                source_id = COALESCE($2, source_id),
                target_id = COALESCE($3, target_id),
                kind = COALESCE($4, kind),
                data = COALESCE($5, data)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Edge>(&query)
            .bind(id)
            .bind(input.source_id)
            .bind(input.target_id)
            .bind(&input.kind)
            .bind(&input.data)
            .fetch_optional(pool)
            .await
    }

    /// Delete a visual edge by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM edges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
