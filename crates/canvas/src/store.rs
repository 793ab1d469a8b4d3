//! In-session mirror of one open tree's nodes and visual edges.
//!
//! The store is a disposable per-session cache: rebuilt from a fresh fetch on
//! each tree load and discarded on navigation away. Mutations apply locally
//! first (optimistic), and the returned command/plan tells the caller what to
//! persist. Server responses come back through `reconcile_*`, at which point
//! the server wins.

use std::collections::BTreeMap;

use genea_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::{classify_connection, EdgeTag, RelationshipRequest};

/// A person projected onto the canvas: id, coordinate, and an opaque data
/// payload for the renderer (name, photo, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: DbId,
    pub x: f64,
    pub y: f64,
    pub data: serde_json::Value,
}

/// A visual connector between two nodes.
///
/// Ids are strings: server rows keep their numeric id rendered as text, while
/// optimistic local edges carry a UUID until reconciled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasEdge {
    pub id: String,
    pub source: DbId,
    pub target: DbId,
    pub tag: EdgeTag,
    /// For marriage-child connectors, the spousal edge they hang from.
    pub marriage_edge_id: Option<String>,
}

/// The position-persist command produced by a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionUpsert {
    pub node_id: DbId,
    pub tree_id: DbId,
    pub x: f64,
    pub y: f64,
}

/// The calls implied by a free-form connect gesture, alongside the
/// optimistic edge already applied locally.
#[derive(Debug, Clone)]
pub struct ConnectPlan {
    pub relationship: RelationshipRequest,
    pub edge: CanvasEdge,
}

/// The authoritative in-session view of one open tree.
#[derive(Debug, Clone, Default)]
pub struct TreeCanvas {
    tree_id: DbId,
    nodes: BTreeMap<DbId, CanvasNode>,
    edges: Vec<CanvasEdge>,
}

impl TreeCanvas {
    /// Build the canvas from a fresh tree fetch, merging each person's
    /// persisted position into its node. Persons without a position land at
    /// the origin until first dragged.
    pub fn load(
        tree_id: DbId,
        persons: impl IntoIterator<Item = (DbId, serde_json::Value)>,
        positions: &[(DbId, f64, f64)],
        edges: Vec<CanvasEdge>,
    ) -> Self {
        let position_of: BTreeMap<DbId, (f64, f64)> = positions
            .iter()
            .map(|&(node_id, x, y)| (node_id, (x, y)))
            .collect();

        let nodes = persons
            .into_iter()
            .map(|(id, data)| {
                let (x, y) = position_of.get(&id).copied().unwrap_or((0.0, 0.0));
                (id, CanvasNode { id, x, y, data })
            })
            .collect();

        TreeCanvas {
            tree_id,
            nodes,
            edges,
        }
    }

    pub fn tree_id(&self) -> DbId {
        self.tree_id
    }

    pub fn node(&self, id: DbId) -> Option<&CanvasNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &CanvasNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[CanvasEdge] {
        &self.edges
    }

    /// Insert a node after the server has created the person (the node id is
    /// server-assigned, so there is no optimistic insert for persons).
    pub fn insert_node(&mut self, node: CanvasNode) {
        self.nodes.insert(node.id, node);
    }

    /// Append a server-confirmed edge.
    pub fn insert_edge(&mut self, edge: CanvasEdge) {
        self.edges.push(edge);
    }

    /// Apply a drag to local state immediately and return the persist
    /// command for the caller to fire. Returns `None` for an unknown node.
    ///
    /// The local move sticks even if the persist later fails; there is no
    /// rollback, only an error surfaced to the user.
    pub fn apply_drag(&mut self, node_id: DbId, x: f64, y: f64) -> Option<PositionUpsert> {
        let node = self.nodes.get_mut(&node_id)?;
        node.x = x;
        node.y = y;
        Some(PositionUpsert {
            node_id,
            tree_id: self.tree_id,
            x,
            y,
        })
    }

    /// Handle a free-form connect gesture: classify the intended relationship
    /// from the endpoints' geometry, apply an optimistic edge locally, and
    /// return the backend calls to issue. Returns `None` if either endpoint
    /// is unknown.
    pub fn connect(&mut self, source: DbId, target: DbId) -> Option<ConnectPlan> {
        let source_y = self.nodes.get(&source)?.y;
        let target_y = self.nodes.get(&target)?.y;

        let (kind, tag) = classify_connection(source_y, target_y);
        let edge = CanvasEdge {
            id: Uuid::new_v4().to_string(),
            source,
            target,
            tag,
            marriage_edge_id: None,
        };
        self.edges.push(edge.clone());

        Some(ConnectPlan {
            relationship: RelationshipRequest {
                kind,
                source_id: source,
                target_id: target,
            },
            edge,
        })
    }

    /// Prune a deleted person and every edge touching them. Local pruning is
    /// trusted; no server-truth re-fetch is required.
    pub fn remove_person(&mut self, id: DbId) {
        self.nodes.remove(&id);
        self.edges.retain(|e| e.source != id && e.target != id);
    }

    /// Prune a deleted edge by id.
    pub fn remove_edge(&mut self, edge_id: &str) {
        self.edges.retain(|e| e.id != edge_id);
    }

    /// Server response for a node's position: server-wins from here on.
    pub fn reconcile_node(&mut self, node_id: DbId, x: f64, y: f64) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.x = x;
            node.y = y;
        }
    }

    /// Server response for an optimistic edge: swap the temporary client id
    /// for the server-assigned one.
    pub fn reconcile_edge(&mut self, temp_id: &str, server_id: DbId) {
        if let Some(edge) = self.edges.iter_mut().find(|e| e.id == temp_id) {
            edge.id = server_id.to_string();
        }
    }
}
