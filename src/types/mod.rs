//! All data types for the graphtrace library.

pub mod edge;
pub mod error;
pub mod event;

pub use edge::{edge_key, Edge};
pub use error::{GraphError, GraphResult};
pub use event::{Algorithm, TraversalEvent};

/// Node identifier. Allocated from a counter that only increases.
pub type NodeId = u64;

/// Edge weight. Unsigned, so Dijkstra never sees a negative edge.
pub type Weight = u64;

/// Sum of weights along a path. Wider than `Weight` so that adding any
/// number of edges together never clamps or wraps.
pub type Distance = u128;

/// Weight given to new edges until the caller picks another.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Largest graph a builder will allocate in one go.
pub const MAX_BUILD_NODES: u64 = 1_000_000;

/// Parse a weight the way an input box would: surrounding whitespace is ignored.
/// Negative and fractional values are rejected with `InvalidWeight`.
pub fn parse_weight(input: &str) -> GraphResult<Weight> {
    input
        .trim()
        .parse::<Weight>()
        .map_err(|_| GraphError::InvalidWeight(input.to_string()))
}
