//! Identifier types shared across crates.

use std::fmt;

/// Handle of a node in a layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One field of a rectangle. Used to describe what an attribute reads or
/// writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    X,
    Y,
    Width,
    Height,
}

impl Field {
    /// Position of the field in per-field tables.
    pub fn index(self) -> usize {
        match self {
            Field::X => 0,
            Field::Y => 1,
            Field::Width => 2,
            Field::Height => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::X => "x",
            Field::Y => "y",
            Field::Width => "width",
            Field::Height => "height",
        };
        f.write_str(name)
    }
}
