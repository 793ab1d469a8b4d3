//! Repository for the `persons` table.

use genea_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tree_id, first_name, last_name, birth_date, birth_place, death_date, \
     occupation, biography, gender, photo_url, created_at, updated_at";

/// Provides CRUD operations for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person under `tree_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tree_id: DbId,
        input: &CreatePerson,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons (tree_id, first_name, last_name, birth_date, birth_place,
                                  death_date, occupation, biography, gender, photo_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(tree_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.birth_date)
            .bind(&input.birth_place)
            .bind(input.death_date)
            .bind(&input.occupation)
            .bind(&input.biography)
            .bind(&input.gender)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await
    }

    /// Find a person by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all persons of a tree, ordered by last name ascending.
    pub async fn list_by_tree(pool: &PgPool, tree_id: DbId) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM persons
             WHERE tree_id = $1
             ORDER BY last_name ASC"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(tree_id)
            .fetch_all(pool)
            .await
    }

    /// Update a person. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE persons SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                birth_date = COALESCE($4, birth_date),
                birth_place = COALESCE($5, birth_place),
                death_date = COALESCE($6, death_date),
                occupation = COALESCE($7, occupation),
                biography = COALESCE($8, biography),
                gender = COALESCE($9, gender),
                photo_url = COALESCE($10, photo_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.birth_date)
            .bind(&input.birth_place)
            .bind(input.death_date)
            .bind(&input.occupation)
            .bind(&input.biography)
            .bind(&input.gender)
            .bind(&input.photo_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person by ID, cascading to their relationships, position,
    /// and edges. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
