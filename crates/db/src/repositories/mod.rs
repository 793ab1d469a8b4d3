//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The relationship repo also
//! exposes `_in` variants taking `&mut PgConnection` so the consistency
//! engine can scope primary and mirror writes to a single transaction.

pub mod edge_repo;
pub mod family_tree_repo;
pub mod node_position_repo;
pub mod person_repo;
pub mod relationship_repo;
pub mod user_repo;

pub use edge_repo::EdgeRepo;
pub use family_tree_repo::FamilyTreeRepo;
pub use node_position_repo::NodePositionRepo;
pub use person_repo::PersonRepo;
pub use relationship_repo::RelationshipRepo;
pub use user_repo::UserRepo;
