//! Gesture planning: what backend calls a canvas action implies.
//!
//! Pure functions over node geometry and relation intent. Nothing here
//! touches local state; the store applies the optimistic side and the caller
//! issues the planned requests.

use genea_core::relationship::RelationshipKind;
use genea_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Connections whose endpoints sit within this many canvas units of the same
/// vertical coordinate are read as spousal; anything steeper is parental.
pub const VERTICAL_TOLERANCE: f64 = 50.0;

/// Vertical distance between generations when auto-placing a node.
pub const GENERATION_OFFSET: f64 = 250.0;

/// Horizontal distance for same-generation placement (spouse, sibling).
pub const LATERAL_OFFSET: f64 = 200.0;

/// Rendering tag carried in a visual edge's `data` payload. Purely
/// presentational; the semantic record is the relationship row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeTag {
    SpouseConnection,
    ParentChildConnection,
    MarriageChildConnection,
}

impl EdgeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeTag::SpouseConnection => "spouse_connection",
            EdgeTag::ParentChildConnection => "parent_child_connection",
            EdgeTag::MarriageChildConnection => "marriage_child_connection",
        }
    }
}

/// Relation intent from a structured action (context menu / add-person flow).
///
/// Extends the registry kinds with the compound `MarriageChild`: a child of
/// both members of an existing spousal edge, which fans out into two parent
/// relationship creations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasRelation {
    Parent,
    Child,
    Spouse,
    Sibling,
    MarriageChild,
}

/// A relationship-creation call to issue against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipRequest {
    pub kind: RelationshipKind,
    pub source_id: DbId,
    pub target_id: DbId,
}

/// A visual-edge creation call to issue against the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRequest {
    pub source_id: DbId,
    pub target_id: DbId,
    pub tag: EdgeTag,
    /// For marriage-child edges, the spousal edge they hang from.
    pub marriage_edge_id: Option<String>,
}

/// Classify a free-form connect gesture from node geometry: near-equal
/// vertical coordinates read as a spousal link, otherwise the source is
/// taken as a parent of the target.
pub fn classify_connection(source_y: f64, target_y: f64) -> (RelationshipKind, EdgeTag) {
    if (source_y - target_y).abs() < VERTICAL_TOLERANCE {
        (RelationshipKind::Spouse, EdgeTag::SpouseConnection)
    } else {
        (RelationshipKind::Parent, EdgeTag::ParentChildConnection)
    }
}

/// Default canvas position for a person added relative to an anchor node.
///
/// Children go below, parents above, spouses and siblings to the right.
/// A marriage-child is centered below the spousal pair; `spouse_positions`
/// must be provided for that variant (falls back to the anchor offset when
/// absent).
pub fn default_position(
    anchor: (f64, f64),
    relation: CanvasRelation,
    spouse_positions: Option<((f64, f64), (f64, f64))>,
) -> (f64, f64) {
    let (ax, ay) = anchor;
    match relation {
        CanvasRelation::Child => (ax, ay + GENERATION_OFFSET),
        CanvasRelation::Parent => (ax, ay - GENERATION_OFFSET),
        CanvasRelation::Spouse | CanvasRelation::Sibling => (ax + LATERAL_OFFSET, ay),
        CanvasRelation::MarriageChild => match spouse_positions {
            Some(((x1, y1), (x2, y2))) => ((x1 + x2) / 2.0, y1.max(y2) + GENERATION_OFFSET),
            None => (ax, ay + GENERATION_OFFSET),
        },
    }
}

/// The relationship creations implied by adding `new_person` relative to
/// `anchor`. `MarriageChild` fans out into one parent call per spouse and
/// requires `spouses`; the other variants yield exactly one call (its mirror
/// is the backend's concern).
pub fn plan_relationships(
    relation: CanvasRelation,
    anchor: DbId,
    new_person: DbId,
    spouses: Option<(DbId, DbId)>,
) -> Vec<RelationshipRequest> {
    match relation {
        CanvasRelation::Child => vec![RelationshipRequest {
            kind: RelationshipKind::Parent,
            source_id: anchor,
            target_id: new_person,
        }],
        CanvasRelation::Parent => vec![RelationshipRequest {
            kind: RelationshipKind::Parent,
            source_id: new_person,
            target_id: anchor,
        }],
        CanvasRelation::Spouse => vec![RelationshipRequest {
            kind: RelationshipKind::Spouse,
            source_id: anchor,
            target_id: new_person,
        }],
        CanvasRelation::Sibling => vec![RelationshipRequest {
            kind: RelationshipKind::Sibling,
            source_id: anchor,
            target_id: new_person,
        }],
        CanvasRelation::MarriageChild => {
            let Some((spouse_a, spouse_b)) = spouses else {
                return Vec::new();
            };
            vec![
                RelationshipRequest {
                    kind: RelationshipKind::Parent,
                    source_id: spouse_a,
                    target_id: new_person,
                },
                RelationshipRequest {
                    kind: RelationshipKind::Parent,
                    source_id: spouse_b,
                    target_id: new_person,
                },
            ]
        }
    }
}

/// The visual edges implied by adding `new_person` relative to `anchor`.
///
/// Marriage-child edges hang one per spouse, each tagged with the shared
/// spousal edge so the renderer can route them jointly.
pub fn plan_edges(
    relation: CanvasRelation,
    anchor: DbId,
    new_person: DbId,
    spouses: Option<(DbId, DbId)>,
    marriage_edge_id: Option<&str>,
) -> Vec<EdgeRequest> {
    match relation {
        CanvasRelation::Child => vec![EdgeRequest {
            source_id: anchor,
            target_id: new_person,
            tag: EdgeTag::ParentChildConnection,
            marriage_edge_id: None,
        }],
        CanvasRelation::Parent => vec![EdgeRequest {
            source_id: new_person,
            target_id: anchor,
            tag: EdgeTag::ParentChildConnection,
            marriage_edge_id: None,
        }],
        CanvasRelation::Spouse => vec![EdgeRequest {
            source_id: anchor,
            target_id: new_person,
            tag: EdgeTag::SpouseConnection,
            marriage_edge_id: None,
        }],
        CanvasRelation::Sibling => vec![EdgeRequest {
            source_id: anchor,
            target_id: new_person,
            tag: EdgeTag::ParentChildConnection,
            marriage_edge_id: None,
        }],
        CanvasRelation::MarriageChild => {
            let Some((spouse_a, spouse_b)) = spouses else {
                return Vec::new();
            };
            [spouse_a, spouse_b]
                .into_iter()
                .map(|spouse| EdgeRequest {
                    source_id: spouse,
                    target_id: new_person,
                    tag: EdgeTag::MarriageChildConnection,
                    marriage_edge_id: marriage_edge_id.map(str::to_string),
                })
                .collect()
        }
    }
}
