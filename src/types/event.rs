//! Traversal events and the algorithms that emit them.

use serde::Serialize;

use super::{Distance, NodeId};

/// One step of an algorithm run, in emission order.
///
/// Events are produced fresh by every engine call and never stored in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    /// The node was expanded (BFS dequeue, DFS arrival, Dijkstra settle).
    NodeVisited { node: NodeId },
    /// A tree edge was followed (BFS/DFS discovery, Dijkstra relaxation).
    EdgeExplored { from: NodeId, to: NodeId },
    /// Shortest path from start to end, start first, with its total weight.
    PathFound { path: Vec<NodeId>, distance: Distance },
    /// The end node is unreachable from the start node.
    NotFound,
}

impl std::fmt::Display for TraversalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeVisited { node } => write!(f, "Visited {}", node),
            Self::EdgeExplored { from, to } => write!(f, "Explored {} -> {}", from, to),
            Self::PathFound { path, distance } => {
                let hops: Vec<String> = path.iter().map(|n| n.to_string()).collect();
                write!(f, "Path {} (distance {})", hops.join(" -> "), distance)
            }
            Self::NotFound => write!(f, "No path"),
        }
    }
}

/// The algorithms a trace can be produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Dijkstra's shortest path.
    Dijkstra,
}

impl Algorithm {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Parse an algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" => Some(Self::Bfs),
            "dfs" | "depth_first" => Some(Self::Dfs),
            "dijkstra" | "shortest_path" => Some(Self::Dijkstra),
            _ => None,
        }
    }

    /// Whether the algorithm needs an end node.
    pub fn needs_end(&self) -> bool {
        matches!(self, Self::Dijkstra)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
