//! Shared domain types for the genea workspace.
//!
//! Home of the relationship type registry ([`relationship::RelationshipKind`]),
//! the domain error taxonomy ([`error::CoreError`]), and the id/timestamp
//! aliases used across the db and api crates.

pub mod error;
pub mod relationship;
pub mod types;
