//! Repository for the `family_trees` table.

use genea_core::types::DbId;
use sqlx::PgPool;

use crate::models::family_tree::{CreateFamilyTree, FamilyTree, UpdateFamilyTree};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_public, owner_id, created_at, updated_at";

/// Provides CRUD operations for family trees.
pub struct FamilyTreeRepo;

impl FamilyTreeRepo {
    /// Insert a new tree owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateFamilyTree,
    ) -> Result<FamilyTree, sqlx::Error> {
        let query = format!(
            "INSERT INTO family_trees (name, description, is_public, owner_id)
             VALUES ($1, $2, COALESCE($3, FALSE), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_public)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a tree by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FamilyTree>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_trees WHERE id = $1");
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trees owned by a user, most recently updated first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<FamilyTree>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM family_trees
             WHERE owner_id = $1
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a tree. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFamilyTree,
    ) -> Result<Option<FamilyTree>, sqlx::Error> {
        let query = format!(
            "UPDATE family_trees SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_public = COALESCE($4, is_public),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tree by ID, cascading to its persons, relationships,
    /// positions, and edges. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM family_trees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
