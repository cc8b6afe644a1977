//! Edge types for the labeled graph.

use serde::{Deserialize, Serialize};

/// An outgoing edge as seen from its source node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Label of the destination node.
    pub target: String,

    /// Non-negative edge weight.
    pub weight: u32,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(target: impl Into<String>, weight: u32) -> Self {
        Self {
            target: target.into(),
            weight,
        }
    }
}

/// A fully specified edge, as read from an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: u32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}
