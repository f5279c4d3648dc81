//! Fluent API for building GraphStore instances.

use crate::types::{GraphError, GraphResult, NodeId, Weight, MAX_BUILD_NODES};

use super::GraphStore;

/// Fluent builder for constructing a GraphStore.
///
/// Edges are validated only in [`GraphBuilder::build`], so a bad link surfaces
/// the same error `GraphStore::add_edge` would have returned.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    node_count: u64,
    edges: Vec<(NodeId, NodeId, Weight)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `count` nodes, IDs `0..count`.
    pub fn with_nodes(count: u64) -> Self {
        Self {
            node_count: count,
            edges: Vec::new(),
        }
    }

    /// Add a node, returning the ID it will have in the built graph.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.node_count;
        self.node_count += 1;
        id
    }

    /// Add an edge between two nodes.
    pub fn link(&mut self, a: NodeId, b: NodeId, weight: Weight) -> &mut Self {
        self.edges.push((a, b, weight));
        self
    }

    /// Build the final GraphStore. Fails with `TooManyNodes` before allocating
    /// anything if the node count exceeds [`MAX_BUILD_NODES`].
    pub fn build(&self) -> GraphResult<GraphStore> {
        if self.node_count > MAX_BUILD_NODES {
            return Err(GraphError::TooManyNodes {
                count: self.node_count,
                max: MAX_BUILD_NODES,
            });
        }
        let mut graph = GraphStore::new();
        for _ in 0..self.node_count {
            graph.add_node();
        }
        for &(a, b, weight) in &self.edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }
}
