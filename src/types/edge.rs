//! The undirected weighted edge.

use serde::Serialize;

use super::{NodeId, Weight};

/// An undirected connection between two distinct nodes.
///
/// `a` and `b` keep the orientation the edge was created with; only
/// [`Edge::key`] should be used when comparing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// First endpoint, as given at creation.
    pub a: NodeId,
    /// Second endpoint, as given at creation.
    pub b: NodeId,
    /// Cost of crossing the edge in either direction.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(a: NodeId, b: NodeId, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    /// The orientation-independent key: `(min, max)`.
    pub fn key(&self) -> (NodeId, NodeId) {
        edge_key(self.a, self.b)
    }

    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Whether this edge joins `x` and `y`, in either orientation.
    pub fn joins(&self, x: NodeId, y: NodeId) -> bool {
        self.key() == edge_key(x, y)
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} (w={})", self.a, self.b, self.weight)
    }
}

/// Normalize an unordered pair.
pub fn edge_key(x: NodeId, y: NodeId) -> (NodeId, NodeId) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}
