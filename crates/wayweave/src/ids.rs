//! Typed identifiers for world elements.
//!
//! Every element carries an [`ElementId`]: a raw numeric id tagged with the
//! [`ElementKind`] it names. The tag keeps a road id and a building id that share
//! the same raw number distinct.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of element an [`ElementId`] refers to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// A raw geometry node, such as a point of a building outline.
    Node,
    /// A vertex of the road graph.
    Road,
    /// A building outline.
    Building,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Node => "node",
            ElementKind::Road => "road",
            ElementKind::Building => "building",
        };
        f.write_str(name)
    }
}

/// Identifier of a world element.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    kind: ElementKind,
    raw: u64,
}

impl ElementId {
    /// Largest raw id accepted.
    pub const MAX_RAW: u64 = (1 << 56) - 1;

    /// Creates a new id, failing with [`Error::InvalidIdentifier`] when `raw` is out of range.
    pub fn new(raw: u64, kind: ElementKind) -> Result<Self> {
        if raw > Self::MAX_RAW {
            return Err(Error::InvalidIdentifier { raw, kind });
        }
        Ok(Self { kind, raw })
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.raw)
    }
}
