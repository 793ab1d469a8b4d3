//! The relationship type registry.
//!
//! Kinship edges are stored as directed pairs even for logically symmetric
//! kinds: every `parent` A→B is paired with a `child` B→A, and every
//! `spouse`/`sibling` A→B with a same-kind B→A. [`RelationshipKind::mirror`]
//! is the single source of truth for that pairing; the consistency engine in
//! the api crate derives every mirror write and mirrored delete from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of kinship edge kinds.
///
/// Serialized in lowercase on the wire (`"parent"`, `"child"`, `"spouse"`,
/// `"sibling"`); an unrecognized kind is rejected at the serde boundary and
/// never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Parent,
    Child,
    Spouse,
    Sibling,
}

impl RelationshipKind {
    /// The kind required on the reversed edge to keep the stored graph
    /// symmetric. Reversing source/target flips parent↔child; spouse and
    /// sibling are self-symmetric.
    pub fn mirror(self) -> RelationshipKind {
        match self {
            RelationshipKind::Parent => RelationshipKind::Child,
            RelationshipKind::Child => RelationshipKind::Parent,
            RelationshipKind::Spouse => RelationshipKind::Spouse,
            RelationshipKind::Sibling => RelationshipKind::Sibling,
        }
    }

    /// Whether reversing the edge keeps the same kind.
    ///
    /// Symmetric kinds get an existence check before the mirror write (a
    /// blind reverse insert would double up on every create); parent/child
    /// do not, matching the reference behavior.
    pub fn is_symmetric(self) -> bool {
        self == self.mirror()
    }

    /// The lowercase wire/storage name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipKind::Parent => "parent",
            RelationshipKind::Child => "child",
            RelationshipKind::Spouse => "spouse",
            RelationshipKind::Sibling => "sibling",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown relationship kind.
#[derive(Debug, thiserror::Error)]
#[error("Unknown relationship kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for RelationshipKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(RelationshipKind::Parent),
            "child" => Ok(RelationshipKind::Child),
            "spouse" => Ok(RelationshipKind::Spouse),
            "sibling" => Ok(RelationshipKind::Sibling),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}
