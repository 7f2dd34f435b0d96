//! Error types for the frame resolver.
//!
//! Resolution itself cannot fail. These errors come from the reference node
//! tree, which checks handles before handing them to the resolver.

use crate::types::NodeId;
use thiserror::Error;

/// Errors from node tree mutation and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    #[error("Moving node {node} under {parent} would make it its own ancestor")]
    Cycle { node: NodeId, parent: NodeId },
}

/// Errors from the checked apply entry point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Attribute {index} references unknown node {node}")]
    UnknownPeer { index: usize, node: NodeId },
}
