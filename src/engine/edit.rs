//! Graph editing on behalf of an interactive host.

use log::{debug, warn};

use crate::graph::GraphStore;
use crate::types::{parse_weight, Edge, GraphResult, NodeId, Weight, DEFAULT_WEIGHT};

/// Editing state that lives between user actions: the weight new edges get
/// and the nodes picked so far for the next edge.
#[derive(Debug, Clone)]
pub struct EditSession {
    current_weight: Weight,
    selected: Vec<NodeId>,
}

impl EditSession {
    /// Create a new session with the default weight and nothing selected.
    pub fn new() -> Self {
        Self {
            current_weight: DEFAULT_WEIGHT,
            selected: Vec::new(),
        }
    }

    /// Weight applied to the next edge.
    pub fn current_weight(&self) -> Weight {
        self.current_weight
    }

    /// Nodes picked for the pending edge, in pick order.
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    /// Parse and adopt a new weight. Weights are non-negative integers:
    /// negative, fractional or non-numeric input falls back to the default
    /// weight and is reported as `InvalidWeight`.
    pub fn set_weight(&mut self, input: &str) -> GraphResult<Weight> {
        match parse_weight(input) {
            Ok(weight) => {
                self.current_weight = weight;
                debug!("weight set to {}", weight);
                Ok(weight)
            }
            Err(e) => {
                warn!("{}; using default weight {}", e, DEFAULT_WEIGHT);
                self.current_weight = DEFAULT_WEIGHT;
                Err(e)
            }
        }
    }

    /// Add an edge between `a` and `b` with the current weight.
    pub fn add_edge(&self, graph: &mut GraphStore, a: NodeId, b: NodeId) -> GraphResult<Edge> {
        graph.add_edge(a, b, self.current_weight)
    }

    /// Pick a node for the pending edge.
    ///
    /// Returns the new edge once two distinct nodes are picked. The selection
    /// is cleared after that second pick whether or not the edge was created.
    pub fn select_for_edge(
        &mut self,
        graph: &mut GraphStore,
        node: NodeId,
    ) -> GraphResult<Option<Edge>> {
        graph.require_node(node)?;
        if self.selected.contains(&node) {
            return Ok(None);
        }
        self.selected.push(node);
        debug!("node {} selected", node);

        if self.selected.len() < 2 {
            return Ok(None);
        }
        let (a, b) = (self.selected[0], self.selected[1]);
        self.selected.clear();
        self.add_edge(graph, a, b).map(Some)
    }

    /// Drop any pending selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Clear the graph and the pending selection together.
    ///
    /// `GraphStore::clear` restarts node IDs at 0, so a selection kept across
    /// it could name a node created afterwards. Hosts that clear the store
    /// directly must call [`EditSession::clear_selection`] as well.
    pub fn clear_graph(&mut self, graph: &mut GraphStore) {
        graph.clear();
        self.selected.clear();
        debug!("graph and selection cleared");
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
