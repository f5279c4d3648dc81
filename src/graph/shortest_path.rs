//! Dijkstra's shortest path, as a pull-based event source.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use log::{debug, trace, warn};

use crate::types::{Distance, GraphResult, NodeId, TraversalEvent};

use super::GraphStore;

/// Where a node is in a Dijkstra run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// No candidate distance yet. Unreachable nodes stay here.
    Unvisited,
    /// Has a tentative distance and sits in the queue.
    Frontier,
    /// Popped with its final distance. Never changes again.
    Settled,
}

/// Queue entry. The derived ordering compares distance first, then node ID,
/// which makes equal-distance ties pop lowest ID first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    distance: Distance,
    node: NodeId,
}

/// One Dijkstra run from `start` to `end`.
///
/// Iterating yields the run's events in order: `NodeVisited` per settled
/// node, `EdgeExplored` per successful relaxation, and finally exactly one
/// `PathFound` or `NotFound`. The run stops settling nodes as soon as `end`
/// is settled.
pub struct DijkstraSearch<'g> {
    graph: &'g GraphStore,
    start: NodeId,
    end: NodeId,
    /// Best known distance. Absent means infinity.
    distances: HashMap<NodeId, Distance>,
    predecessors: HashMap<NodeId, NodeId>,
    settled: HashSet<NodeId>,
    /// May hold superseded entries; they are dropped on pop.
    heap: BinaryHeap<Reverse<HeapEntry>>,
    pending: VecDeque<TraversalEvent>,
    finished: bool,
}

impl<'g> DijkstraSearch<'g> {
    /// Validate both endpoints and seed the queue with `(0, start)`.
    pub fn new(graph: &'g GraphStore, start: NodeId, end: NodeId) -> GraphResult<Self> {
        graph.require_node(start)?;
        graph.require_node(end)?;
        debug!("dijkstra from {} to {}", start, end);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            distance: 0,
            node: start,
        }));

        Ok(Self {
            graph,
            start,
            end,
            distances: HashMap::from([(start, 0)]),
            predecessors: HashMap::new(),
            settled: HashSet::new(),
            heap,
            pending: VecDeque::new(),
            finished: false,
        })
    }

    /// Current state of `node` in this run.
    pub fn state(&self, node: NodeId) -> NodeState {
        if self.settled.contains(&node) {
            NodeState::Settled
        } else if self.distances.contains_key(&node) {
            NodeState::Frontier
        } else {
            NodeState::Unvisited
        }
    }

    /// Best known distance to `node` so far, `None` while it is infinite.
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(&node).copied()
    }

    /// Whether the final path event has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run to completion and collect every event.
    pub fn run(self) -> Vec<TraversalEvent> {
        self.collect()
    }

    /// Settle the next node, queueing the events it causes. Returns false once
    /// the queue is exhausted or the end node has been settled.
    fn step(&mut self) -> bool {
        let Some(Reverse(HeapEntry { distance, node })) = self.heap.pop() else {
            return false;
        };
        if !self.settled.insert(node) {
            trace!("dijkstra skipping stale entry ({}, {})", distance, node);
            return true;
        }

        trace!("dijkstra settled {} at {}", node, distance);
        self.pending.push_back(TraversalEvent::NodeVisited { node });
        if node == self.end {
            return false;
        }

        for &(neighbor, weight) in self.graph.adjacent(node) {
            if self.settled.contains(&neighbor) {
                continue;
            }
            let Some(candidate) = distance.checked_add(Distance::from(weight)) else {
                warn!("dijkstra: distance to {} via {} overflows, skipping", neighbor, node);
                continue;
            };
            if let Some(&best) = self.distances.get(&neighbor) {
                if candidate >= best {
                    continue;
                }
            }
            self.distances.insert(neighbor, candidate);
            self.predecessors.insert(neighbor, node);
            self.heap.push(Reverse(HeapEntry {
                distance: candidate,
                node: neighbor,
            }));
            self.pending.push_back(TraversalEvent::EdgeExplored {
                from: node,
                to: neighbor,
            });
        }
        true
    }

    /// The closing event: the reconstructed path, or `NotFound`.
    fn outcome(&self) -> TraversalEvent {
        let Some(&distance) = self.distances.get(&self.end) else {
            debug!("dijkstra: {} unreachable from {}", self.end, self.start);
            return TraversalEvent::NotFound;
        };

        let mut path = vec![self.end];
        let mut current = self.end;
        while let Some(&previous) = self.predecessors.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        debug!("dijkstra: path {:?} with distance {}", path, distance);
        TraversalEvent::PathFound { path, distance }
    }
}

impl Iterator for DijkstraSearch<'_> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.finished {
                return None;
            }
            if !self.step() {
                let outcome = self.outcome();
                self.pending.push_back(outcome);
                self.finished = true;
            }
        }
    }
}

/// Dijkstra's shortest path from `start` to `end`, collected eagerly.
pub fn dijkstra(
    graph: &GraphStore,
    start: NodeId,
    end: NodeId,
) -> GraphResult<Vec<TraversalEvent>> {
    Ok(DijkstraSearch::new(graph, start, end)?.run())
}
