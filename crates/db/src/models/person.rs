//! Person entity model and DTOs.

use chrono::NaiveDate;
use genea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A person row from the `persons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: DbId,
    pub tree_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub death_date: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub biography: Option<String>,
    /// One of `male`, `female`, `other` when present.
    pub gender: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The subset of person fields embedded in relationship responses.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub photo_url: Option<String>,
}

/// DTO for creating a new person. `tree_id` comes from the URL path.
///
/// Gender is checked against the closed domain in the handler (the schema
/// CHECK backstops it).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub death_date: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub biography: Option<String>,
    pub gender: Option<String>,
    pub photo_url: Option<String>,
}

/// DTO for updating an existing person. Only provided fields are applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub death_date: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub biography: Option<String>,
    pub gender: Option<String>,
    pub photo_url: Option<String>,
}
