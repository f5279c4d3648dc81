//! Unweighted traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use crate::types::{GraphResult, NodeId, TraversalEvent};

use super::GraphStore;

/// BFS traversal from a starting node.
///
/// Nodes are visited on dequeue, so they come out in non-decreasing hop
/// distance from `start_id`. `EdgeExplored` is emitted only for tree edges,
/// at the moment the neighbor is first discovered.
pub fn bfs(graph: &GraphStore, start_id: NodeId) -> GraphResult<Vec<TraversalEvent>> {
    graph.require_node(start_id)?;
    debug!("bfs from {}", start_id);

    let mut events = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start_id);
    queue.push_back(start_id);

    while let Some(current) = queue.pop_front() {
        trace!("bfs visit {}", current);
        events.push(TraversalEvent::NodeVisited { node: current });

        for &(neighbor, _) in graph.adjacent(current) {
            if !visited.insert(neighbor) {
                continue;
            }
            events.push(TraversalEvent::EdgeExplored {
                from: current,
                to: neighbor,
            });
            queue.push_back(neighbor);
        }
    }

    Ok(events)
}

/// DFS traversal from a starting node, in recursive pre-order.
///
/// Each tree edge is reported before the walk descends along it. An explicit
/// stack of `(node, next neighbor index)` frames stands in for recursion so
/// long chains cannot overflow the call stack.
pub fn dfs(graph: &GraphStore, start_id: NodeId) -> GraphResult<Vec<TraversalEvent>> {
    graph.require_node(start_id)?;
    debug!("dfs from {}", start_id);

    let mut events = vec![TraversalEvent::NodeVisited { node: start_id }];
    let mut visited: HashSet<NodeId> = HashSet::from([start_id]);
    let mut stack: Vec<(NodeId, usize)> = vec![(start_id, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        let Some(&(neighbor, _)) = graph.adjacent(current).get(cursor) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if !visited.insert(neighbor) {
            continue;
        }
        events.push(TraversalEvent::EdgeExplored {
            from: current,
            to: neighbor,
        });
        trace!("dfs visit {}", neighbor);
        events.push(TraversalEvent::NodeVisited { node: neighbor });
        stack.push((neighbor, 0));
    }

    Ok(events)
}
