//! graphtrace — an undirected weighted graph with step-by-step BFS, DFS and
//! Dijkstra engines.
//!
//! The engines never draw anything. Each call reads a [`GraphStore`] and
//! returns the ordered [`TraversalEvent`]s a renderer can animate.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{EditSession, Trace, TraceEngine, TraceParams, TraceSummary};
pub use graph::{bfs, dfs, dijkstra, DijkstraSearch, GraphBuilder, GraphStore, NodeState};
pub use types::{
    edge_key, parse_weight, Algorithm, Distance, Edge, GraphError, GraphResult, NodeId, TraversalEvent,
    Weight, DEFAULT_WEIGHT, MAX_BUILD_NODES,
};
