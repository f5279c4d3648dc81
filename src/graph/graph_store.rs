//! Core graph structure — nodes + undirected weighted edges with adjacency lists.

use std::collections::BTreeMap;

use log::debug;

use crate::types::{Edge, GraphError, GraphResult, NodeId, Weight};

/// The in-memory undirected graph the algorithm engines read from.
///
/// Adjacency is kept symmetric: edge `(a, b, w)` appears as `(b, w)` in `a`'s
/// list and `(a, w)` in `b`'s list. Lists keep edge insertion order, which is
/// the order the engines expand neighbors in.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node ID -> ordered (neighbor, weight) pairs.
    adjacency: BTreeMap<NodeId, Vec<(NodeId, Weight)>>,
    /// All edges, in creation order.
    edges: Vec<Edge>,
    /// Next node ID to hand out. Never decreases except on `clear`.
    next_id: NodeId,
}

impl GraphStore {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `id` is a live node.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// All node IDs, ascending (which is also creation order).
    pub fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    /// All edges in creation order, each unordered pair once.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The ID the next `add_node` call will return.
    pub fn next_id(&self) -> NodeId {
        self.next_id
    }

    /// Whether `x` and `y` are connected, in either orientation.
    pub fn has_edge(&self, x: NodeId, y: NodeId) -> bool {
        self.edge_weight(x, y).is_some()
    }

    /// Weight of the edge joining `x` and `y`, if any.
    pub fn edge_weight(&self, x: NodeId, y: NodeId) -> Option<Weight> {
        self.adjacency
            .get(&x)?
            .iter()
            .find(|(n, _)| *n == y)
            .map(|&(_, w)| w)
    }

    /// Neighbors of a node with the connecting edge weights.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[(NodeId, Weight)]> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Adjacency of a node already known to exist; empty for unknown IDs.
    pub(crate) fn adjacent(&self, id: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fail with `NodeNotFound` unless `id` is a live node.
    pub(crate) fn require_node(&self, id: NodeId) -> GraphResult<()> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(id))
        }
    }

    /// Add a node, returns the assigned ID.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.adjacency.insert(id, Vec::new());
        debug!("added node {}", id);
        id
    }

    /// Add an undirected edge between two existing, distinct, unconnected nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> GraphResult<Edge> {
        // Validate: no self-edges
        if a == b {
            return Err(GraphError::SelfEdge(a));
        }
        self.require_node(a)?;
        self.require_node(b)?;
        if self.has_edge(a, b) {
            return Err(GraphError::DuplicateEdge(a, b));
        }

        let edge = Edge::new(a, b, weight);
        self.edges.push(edge);
        if let Some(list) = self.adjacency.get_mut(&a) {
            list.push((b, weight));
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.push((a, weight));
        }
        debug!("added edge {}", edge);
        Ok(edge)
    }

    /// Remove a node and all its edges. Returns the edges removed with it.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Vec<Edge>> {
        let adjacent = self
            .adjacency
            .remove(&id)
            .ok_or(GraphError::NodeNotFound(id))?;

        for (neighbor, _) in &adjacent {
            if let Some(list) = self.adjacency.get_mut(neighbor) {
                list.retain(|(n, _)| *n != id);
            }
        }

        let mut removed = Vec::with_capacity(adjacent.len());
        self.edges.retain(|e| {
            if e.touches(id) {
                removed.push(*e);
                false
            } else {
                true
            }
        });

        debug!("removed node {} and {} incident edges", id, removed.len());
        Ok(removed)
    }

    /// Remove the edge joining `x` and `y`, in either orientation.
    pub fn remove_edge(&mut self, x: NodeId, y: NodeId) -> GraphResult<Edge> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.joins(x, y))
            .ok_or(GraphError::EdgeNotFound(x, y))?;
        let edge = self.edges.remove(pos);

        if let Some(list) = self.adjacency.get_mut(&x) {
            list.retain(|(n, _)| *n != y);
        }
        if let Some(list) = self.adjacency.get_mut(&y) {
            list.retain(|(n, _)| *n != x);
        }
        debug!("removed edge {}", edge);
        Ok(edge)
    }

    /// Reset to the empty graph. The ID counter restarts at 0.
    pub fn clear(&mut self) {
        debug!(
            "cleared graph ({} nodes, {} edges)",
            self.node_count(),
            self.edge_count()
        );
        self.adjacency.clear();
        self.edges.clear();
        self.next_id = 0;
    }
}
