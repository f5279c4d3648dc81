//! Error types for the graphtrace library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the graphtrace library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(NodeId),

    /// No edge joins the two nodes.
    #[error("No edge between nodes {0} and {1}")]
    EdgeNotFound(NodeId, NodeId),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on node {0}")]
    SelfEdge(NodeId),

    /// The unordered pair is already connected.
    #[error("Edge between nodes {0} and {1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    /// Weight text could not be parsed as a non-negative integer.
    #[error("Invalid weight: {0:?}")]
    InvalidWeight(String),

    /// Edge text is not of the form `A-B` or `A-B:W`.
    #[error("Invalid edge spec: {0:?} (expected A-B or A-B:W)")]
    InvalidEdgeSpec(String),

    /// A builder was asked for more nodes than it will allocate.
    #[error("Graph would need {count} nodes, more than the maximum of {max}")]
    TooManyNodes { count: u64, max: u64 },

    /// The algorithm needs a target node and none was given.
    #[error("{0} requires an end node")]
    MissingEndNode(&'static str),
}

impl GraphError {
    /// True for errors that reference a node or edge absent from the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound(_, _))
    }
}

/// Convenience result type for graphtrace operations.
pub type GraphResult<T> = Result<T, GraphError>;
