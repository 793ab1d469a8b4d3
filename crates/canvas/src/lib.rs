//! Client graph store for the tree-editing canvas.
//!
//! An in-memory mirror of one open tree's nodes and visual edges,
//! transport-agnostic: mutations apply optimistically to local state and
//! return the backend calls they imply as plain data ([`plan::RelationshipRequest`],
//! [`store::PositionUpsert`], [`plan::EdgeRequest`]); the caller issues them
//! and feeds responses back through the `reconcile_*` methods. Local state
//! wins until the server responds, then the server wins.

pub mod node_state;
pub mod plan;
pub mod store;

pub use node_state::{NodeAction, NodeUiState};
pub use plan::{classify_connection, CanvasRelation, EdgeTag, RelationshipRequest};
pub use store::{CanvasEdge, CanvasNode, TreeCanvas};
