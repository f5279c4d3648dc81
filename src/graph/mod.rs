//! In-memory graph and the algorithm engines that read it.

pub mod builder;
pub mod graph_store;
pub mod shortest_path;
pub mod traversal;

pub use builder::GraphBuilder;
pub use graph_store::GraphStore;
pub use shortest_path::{dijkstra, DijkstraSearch, NodeState};
pub use traversal::{bfs, dfs};
