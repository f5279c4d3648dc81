//! Phase 2 tests: BFS, DFS and Dijkstra engines.

use graphtrace::graph::{
    bfs, dfs, dijkstra, DijkstraSearch, GraphBuilder, GraphStore, NodeState,
};
use graphtrace::types::error::GraphError;
use graphtrace::types::{Distance, NodeId, TraversalEvent, Weight};

use TraversalEvent::{EdgeExplored, NodeVisited, NotFound, PathFound};

// ==================== Helper ====================

fn build(nodes: u64, edges: &[(NodeId, NodeId, Weight)]) -> GraphStore {
    let mut builder = GraphBuilder::with_nodes(nodes);
    for &(a, b, w) in edges {
        builder.link(a, b, w);
    }
    builder.build().unwrap()
}

fn visited(events: &[TraversalEvent]) -> Vec<NodeId> {
    events
        .iter()
        .filter_map(|e| match e {
            NodeVisited { node } => Some(*node),
            _ => None,
        })
        .collect()
}

fn explored(events: &[TraversalEvent]) -> Vec<(NodeId, NodeId)> {
    events
        .iter()
        .filter_map(|e| match e {
            EdgeExplored { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

/// The weighted example where the direct route is not the shortest.
fn detour_graph() -> GraphStore {
    build(4, &[(0, 1, 5), (0, 2, 1), (2, 1, 1), (1, 3, 1), (2, 3, 8)])
}

// ==================== BFS ====================

#[test]
fn test_bfs_single_node() {
    let graph = build(1, &[]);
    assert_eq!(bfs(&graph, 0).unwrap(), vec![NodeVisited { node: 0 }]);
}

#[test]
fn test_bfs_chain_order() {
    let graph = build(3, &[(0, 1, 1), (1, 2, 1)]);
    let events = bfs(&graph, 0).unwrap();
    assert_eq!(
        events,
        vec![
            NodeVisited { node: 0 },
            EdgeExplored { from: 0, to: 1 },
            NodeVisited { node: 1 },
            EdgeExplored { from: 1, to: 2 },
            NodeVisited { node: 2 },
        ]
    );
}

#[test]
fn test_bfs_levels_and_tree_edges_only() {
    // 0 connects to 1 and 2, both connect to 3: a square.
    let graph = build(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
    let events = bfs(&graph, 0).unwrap();

    assert_eq!(visited(&events), vec![0, 1, 2, 3]);
    // (2, 3) is a cross edge and must not be reported
    assert_eq!(explored(&events), vec![(0, 1), (0, 2), (1, 3)]);
}

#[test]
fn test_bfs_discovery_precedes_expansion() {
    let graph = build(3, &[(0, 1, 1), (0, 2, 1)]);
    let events = bfs(&graph, 0).unwrap();
    assert_eq!(
        events,
        vec![
            NodeVisited { node: 0 },
            EdgeExplored { from: 0, to: 1 },
            EdgeExplored { from: 0, to: 2 },
            NodeVisited { node: 1 },
            NodeVisited { node: 2 },
        ]
    );
}

#[test]
fn test_bfs_ignores_other_components() {
    let graph = build(5, &[(0, 1, 1), (3, 4, 1)]);
    assert_eq!(visited(&bfs(&graph, 0).unwrap()), vec![0, 1]);
    assert_eq!(visited(&bfs(&graph, 4).unwrap()), vec![4, 3]);
    assert_eq!(visited(&bfs(&graph, 2).unwrap()), vec![2]);
}

#[test]
fn test_bfs_unknown_start() {
    let graph = build(2, &[]);
    assert_eq!(bfs(&graph, 7), Err(GraphError::NodeNotFound(7)));
}

// ==================== DFS ====================

#[test]
fn test_dfs_single_node() {
    let graph = build(1, &[]);
    assert_eq!(dfs(&graph, 0).unwrap(), vec![NodeVisited { node: 0 }]);
}

#[test]
fn test_dfs_goes_deep_first() {
    // Same square as the BFS test: DFS reaches 3 through 1 before 2.
    let graph = build(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
    let events = dfs(&graph, 0).unwrap();
    assert_eq!(
        events,
        vec![
            NodeVisited { node: 0 },
            EdgeExplored { from: 0, to: 1 },
            NodeVisited { node: 1 },
            EdgeExplored { from: 1, to: 3 },
            NodeVisited { node: 3 },
            EdgeExplored { from: 3, to: 2 },
            NodeVisited { node: 2 },
        ]
    );
}

#[test]
fn test_dfs_follows_adjacency_order() {
    let graph = build(4, &[(0, 3, 1), (0, 2, 1), (0, 1, 1)]);
    assert_eq!(visited(&dfs(&graph, 0).unwrap()), vec![0, 3, 2, 1]);
}

#[test]
fn test_dfs_long_chain() {
    let n = 50_000u64;
    let edges: Vec<(NodeId, NodeId, Weight)> = (1..n).map(|i| (i - 1, i, 1)).collect();
    let graph = build(n, &edges);

    let events = dfs(&graph, 0).unwrap();
    assert_eq!(visited(&events).len(), n as usize);
    assert_eq!(events.last(), Some(&NodeVisited { node: n - 1 }));
}

#[test]
fn test_dfs_unknown_start() {
    let graph = build(1, &[]);
    assert_eq!(dfs(&graph, 3), Err(GraphError::NodeNotFound(3)));
}

// ==================== Dijkstra ====================

#[test]
fn test_dijkstra_prefers_cheaper_detour() {
    let graph = detour_graph();
    let events = dijkstra(&graph, 0, 3).unwrap();

    assert_eq!(
        events.last(),
        Some(&PathFound {
            path: vec![0, 2, 1, 3],
            distance: 3
        })
    );
    assert_eq!(visited(&events), vec![0, 2, 1, 3]);
    assert_eq!(explored(&events), vec![(0, 1), (0, 2), (2, 1), (2, 3), (1, 3)]);
}

#[test]
fn test_dijkstra_same_node() {
    let graph = detour_graph();
    assert_eq!(
        dijkstra(&graph, 2, 2).unwrap(),
        vec![
            NodeVisited { node: 2 },
            PathFound {
                path: vec![2],
                distance: 0
            },
        ]
    );
}

#[test]
fn test_dijkstra_unreachable() {
    let graph = build(4, &[(0, 1, 2), (2, 3, 2)]);
    let events = dijkstra(&graph, 0, 3).unwrap();

    assert_eq!(events.last(), Some(&NotFound));
    // The whole start component is settled before giving up
    assert_eq!(visited(&events), vec![0, 1]);
    assert_eq!(events.iter().filter(|e| **e == NotFound).count(), 1);
}

#[test]
fn test_dijkstra_unknown_endpoints() {
    let graph = build(2, &[(0, 1, 1)]);
    assert_eq!(dijkstra(&graph, 5, 1), Err(GraphError::NodeNotFound(5)));
    assert_eq!(dijkstra(&graph, 0, 6), Err(GraphError::NodeNotFound(6)));
}

#[test]
fn test_dijkstra_stale_entries_are_skipped() {
    // Node 3 is queued at 10, then improved to 3. The target 4 is isolated,
    // so the queue drains completely and the stale (10, 3) entry is popped;
    // it must not produce a second visit.
    let graph = build(5, &[(0, 3, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1)]);
    let events = dijkstra(&graph, 0, 4).unwrap();

    assert_eq!(visited(&events), vec![0, 1, 2, 3]);
    assert_eq!(explored(&events), vec![(0, 3), (0, 1), (1, 2), (2, 3)]);
    assert_eq!(events.last(), Some(&NotFound));

    let events = dijkstra(&graph, 0, 3).unwrap();
    assert_eq!(
        events.last(),
        Some(&PathFound {
            path: vec![0, 1, 2, 3],
            distance: 3
        })
    );
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let graph = build(3, &[(0, 1, 0), (1, 2, 0)]);
    assert_eq!(
        dijkstra(&graph, 0, 2).unwrap().last(),
        Some(&PathFound {
            path: vec![0, 1, 2],
            distance: 0
        })
    );
}

#[test]
fn test_dijkstra_sums_past_weight_range() {
    let max = Weight::MAX;
    let graph = build(3, &[(0, 1, max), (1, 2, max)]);
    assert_eq!(
        dijkstra(&graph, 0, 2).unwrap().last(),
        Some(&PathFound {
            path: vec![0, 1, 2],
            distance: 2 * Distance::from(max)
        })
    );
}

#[test]
fn test_dijkstra_large_weights_still_compare() {
    // Via 1 costs 2*MAX, via 2 costs one less. Clamped sums would tie and
    // pick the lower ID.
    let max = Weight::MAX;
    let graph = build(4, &[(0, 1, max), (1, 3, max), (0, 2, max), (2, 3, max - 1)]);
    let events = dijkstra(&graph, 0, 3).unwrap();

    assert_eq!(
        events.last(),
        Some(&PathFound {
            path: vec![0, 2, 3],
            distance: 2 * Distance::from(max) - 1
        })
    );
    assert_eq!(explored(&events), vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
}

#[test]
fn test_dijkstra_does_not_mutate_graph() {
    let graph = detour_graph();
    let before = graph.edges().to_vec();
    dijkstra(&graph, 0, 3).unwrap();
    bfs(&graph, 0).unwrap();
    dfs(&graph, 0).unwrap();
    assert_eq!(graph.edges(), before.as_slice());
}

#[test]
fn test_dijkstra_search_state_machine() {
    let graph = detour_graph();
    let mut search = DijkstraSearch::new(&graph, 0, 3).unwrap();

    assert_eq!(search.next(), Some(NodeVisited { node: 0 }));
    assert_eq!(search.next(), Some(EdgeExplored { from: 0, to: 1 }));
    assert_eq!(search.next(), Some(EdgeExplored { from: 0, to: 2 }));
    assert_eq!(search.state(0), NodeState::Settled);
    assert_eq!(search.state(1), NodeState::Frontier);
    assert_eq!(search.distance(1), Some(5));
    assert_eq!(search.state(3), NodeState::Unvisited);

    // Settling 2 improves 1 from 5 to 2; 1 stays on the frontier
    assert_eq!(search.next(), Some(NodeVisited { node: 2 }));
    assert_eq!(search.next(), Some(EdgeExplored { from: 2, to: 1 }));
    assert_eq!(search.state(1), NodeState::Frontier);
    assert_eq!(search.distance(1), Some(2));

    let rest: Vec<TraversalEvent> = search.by_ref().collect();
    assert_eq!(rest.last(), Some(&PathFound { path: vec![0, 2, 1, 3], distance: 3 }));
    assert_eq!(search.state(3), NodeState::Settled);
    assert_eq!(search.distance(3), Some(3));
}

#[test]
fn test_dijkstra_runs_are_independent() {
    let graph = detour_graph();
    let first = dijkstra(&graph, 0, 3).unwrap();
    let second = dijkstra(&graph, 0, 3).unwrap();
    assert_eq!(first, second);
}
