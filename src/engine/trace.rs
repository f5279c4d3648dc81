//! Trace executor — runs one algorithm and packages its events.

use log::debug;
use serde::Serialize;

use crate::graph::{bfs, dfs, dijkstra, GraphStore};
use crate::types::{Algorithm, Distance, GraphError, GraphResult, NodeId, TraversalEvent};

/// Parameters for a trace run.
#[derive(Debug, Clone, Copy)]
pub struct TraceParams {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Starting node ID.
    pub start: NodeId,
    /// Target node ID. Required for Dijkstra, ignored otherwise.
    pub end: Option<NodeId>,
}

impl TraceParams {
    /// BFS from `start`.
    pub fn bfs(start: NodeId) -> Self {
        Self {
            algorithm: Algorithm::Bfs,
            start,
            end: None,
        }
    }

    /// DFS from `start`.
    pub fn dfs(start: NodeId) -> Self {
        Self {
            algorithm: Algorithm::Dfs,
            start,
            end: None,
        }
    }

    /// Dijkstra from `start` to `end`.
    pub fn dijkstra(start: NodeId, end: NodeId) -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            start,
            end: Some(end),
        }
    }
}

/// The ordered events of one algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    /// Algorithm that produced the events.
    pub algorithm: Algorithm,
    /// Starting node ID.
    pub start: NodeId,
    /// Target node ID, for Dijkstra.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NodeId>,
    /// Events in emission order.
    pub events: Vec<TraversalEvent>,
}

impl Trace {
    /// Visited node IDs, in visit order.
    pub fn visited(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::NodeVisited { node } => Some(*node),
                _ => None,
            })
            .collect()
    }

    /// Explored `(from, to)` pairs, in order.
    pub fn explored_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::EdgeExplored { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// The path and its distance, if the run found one.
    pub fn path(&self) -> Option<(&[NodeId], Distance)> {
        self.events.iter().find_map(|e| match e {
            TraversalEvent::PathFound { path, distance } => Some((path.as_slice(), *distance)),
            _ => None,
        })
    }

    /// Whether the run reported the end node as unreachable.
    pub fn is_not_found(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TraversalEvent::NotFound))
    }

    /// Compact description of the run, for hosts that only need the outcome.
    pub fn summary(&self) -> TraceSummary {
        TraceSummary {
            algorithm: self.algorithm,
            events: self.events.len(),
            visited: self.visited(),
            path: self.path().map(|(p, _)| p.to_vec()),
            distance: self.path().map(|(_, d)| d),
        }
    }
}

/// Outcome of a trace without the individual events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    /// Algorithm that produced the trace.
    pub algorithm: Algorithm,
    /// Total number of events.
    pub events: usize,
    /// Visited node IDs, in visit order.
    pub visited: Vec<NodeId>,
    /// Path found by Dijkstra, if any.
    pub path: Option<Vec<NodeId>>,
    /// Total weight of `path`.
    pub distance: Option<Distance>,
}

/// The trace engine runs any algorithm against a graph snapshot.
#[derive(Debug, Default)]
pub struct TraceEngine;

impl TraceEngine {
    /// Create a new trace engine.
    pub fn new() -> Self {
        Self
    }

    /// Run `params.algorithm` and return its events. The graph is only read.
    pub fn run(&self, graph: &GraphStore, params: TraceParams) -> GraphResult<Trace> {
        let events = match params.algorithm {
            Algorithm::Bfs => bfs(graph, params.start)?,
            Algorithm::Dfs => dfs(graph, params.start)?,
            Algorithm::Dijkstra => {
                let end = params
                    .end
                    .ok_or(GraphError::MissingEndNode(Algorithm::Dijkstra.name()))?;
                dijkstra(graph, params.start, end)?
            }
        };
        debug!(
            "{} from {} produced {} events",
            params.algorithm,
            params.start,
            events.len()
        );

        Ok(Trace {
            algorithm: params.algorithm,
            start: params.start,
            end: params.end.filter(|_| params.algorithm.needs_end()),
            events,
        })
    }
}
