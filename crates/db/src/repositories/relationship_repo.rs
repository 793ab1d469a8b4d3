//! Repository for the `relationships` table.
//!
//! The consistency engine writes a primary row and its mirror inside one
//! transaction, so every mutating method here comes in a `_in` variant taking
//! `&mut PgConnection` alongside the usual pool-based reads.

use genea_core::relationship::RelationshipKind;
use genea_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::person::PersonRef;
use crate::models::relationship::{Relationship, RelationshipWithPersons};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kind, source_id, target_id, created_at";

/// Flat row for the person-enriched join; mapped into
/// [`RelationshipWithPersons`] before leaving the repository.
#[derive(sqlx::FromRow)]
struct EnrichedRow {
    id: DbId,
    kind: String,
    source_id: DbId,
    target_id: DbId,
    created_at: Timestamp,
    s_first_name: String,
    s_last_name: String,
    s_gender: Option<String>,
    s_photo_url: Option<String>,
    t_first_name: String,
    t_last_name: String,
    t_gender: Option<String>,
    t_photo_url: Option<String>,
}

impl From<EnrichedRow> for RelationshipWithPersons {
    fn from(row: EnrichedRow) -> Self {
        RelationshipWithPersons {
            id: row.id,
            kind: row.kind,
            source_id: row.source_id,
            target_id: row.target_id,
            created_at: row.created_at,
            source: PersonRef {
                id: row.source_id,
                first_name: row.s_first_name,
                last_name: row.s_last_name,
                gender: row.s_gender,
                photo_url: row.s_photo_url,
            },
            target: PersonRef {
                id: row.target_id,
                first_name: row.t_first_name,
                last_name: row.t_last_name,
                gender: row.t_gender,
                photo_url: row.t_photo_url,
            },
        }
    }
}

/// Provides directed kinship edge storage for the consistency engine.
pub struct RelationshipRepo;

impl RelationshipRepo {
    /// Insert a directed edge within an open transaction.
    pub async fn create_in(
        conn: &mut PgConnection,
        kind: RelationshipKind,
        source_id: DbId,
        target_id: DbId,
    ) -> Result<Relationship, sqlx::Error> {
        let query = format!(
            "INSERT INTO relationships (kind, source_id, target_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Relationship>(&query)
            .bind(kind.as_str())
            .bind(source_id)
            .bind(target_id)
            .fetch_one(conn)
            .await
    }

    /// Find an exact `(kind, source, target)` triple within an open
    /// transaction. Returns the first match; duplicates can exist (see the
    /// schema notes on the missing unique index).
    pub async fn find_triple_in(
        conn: &mut PgConnection,
        kind: RelationshipKind,
        source_id: DbId,
        target_id: DbId,
    ) -> Result<Option<Relationship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM relationships
             WHERE kind = $1 AND source_id = $2 AND target_id = $3
             LIMIT 1"
        );
        sqlx::query_as::<_, Relationship>(&query)
            .bind(kind.as_str())
            .bind(source_id)
            .bind(target_id)
            .fetch_optional(conn)
            .await
    }

    /// Find a relationship by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Relationship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM relationships WHERE id = $1");
        sqlx::query_as::<_, Relationship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Same as [`RelationshipRepo::find_by_id`] but within an open transaction.
    pub async fn find_by_id_in(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Relationship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM relationships WHERE id = $1");
        sqlx::query_as::<_, Relationship>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Delete a relationship by ID within an open transaction.
    /// Returns `true` if a row was removed.
    pub async fn delete_in(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM relationships WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete **all** rows matching an exact `(kind, source, target)` triple
    /// within an open transaction — a set delete tolerating zero or multiple
    /// mirrors. Returns the number of rows removed.
    pub async fn delete_triple_in(
        conn: &mut PgConnection,
        kind: RelationshipKind,
        source_id: DbId,
        target_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM relationships
             WHERE kind = $1 AND source_id = $2 AND target_id = $3",
        )
        .bind(kind.as_str())
        .bind(source_id)
        .bind(target_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// List every relationship touching a person (as source or target),
    /// enriched with both endpoint persons.
    pub async fn list_for_person(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Vec<RelationshipWithPersons>, sqlx::Error> {
        let rows = sqlx::query_as::<_, EnrichedRow>(
            "SELECT r.id, r.kind, r.source_id, r.target_id, r.created_at,
                    s.first_name AS s_first_name, s.last_name AS s_last_name,
                    s.gender AS s_gender, s.photo_url AS s_photo_url,
                    t.first_name AS t_first_name, t.last_name AS t_last_name,
                    t.gender AS t_gender, t.photo_url AS t_photo_url
             FROM relationships r
             JOIN persons s ON s.id = r.source_id
             JOIN persons t ON t.id = r.target_id
             WHERE r.source_id = $1 OR r.target_id = $1
             ORDER BY r.id ASC",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
