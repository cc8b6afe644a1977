//! Dijkstra shortest-path queries.
//!
//! The queue holds `(distance, node)` entries and is never updated in
//! place: an improved distance pushes a fresh entry, and entries for
//! nodes that are already settled are skipped when popped.

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, ShortestPathGraph};
use crate::path::{Distances, PathResult};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// A queue entry. Ordered so that `BinaryHeap` pops the smallest
/// distance first, and among equal distances the entry pushed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    distance: u64,
    seq: u64,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-query state. Owned by one call and dropped when it returns.
struct Search<'g> {
    graph: &'g ShortestPathGraph,
    start: NodeId,
    /// Tentative distances; `None` is infinity.
    distance: Vec<Option<u64>>,
    previous: Vec<Option<NodeId>>,
    visited: Vec<bool>,
    queue: BinaryHeap<QueueEntry>,
    pushes: u64,
    /// Nodes in the order they were finalized.
    settled: Vec<NodeId>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g ShortestPathGraph, start: NodeId) -> Self {
        let n = graph.node_count();
        let mut search = Self {
            graph,
            start,
            distance: vec![None; n],
            previous: vec![None; n],
            visited: vec![false; n],
            queue: BinaryHeap::new(),
            pushes: 0,
            settled: Vec::new(),
        };
        search.distance[start.index()] = Some(0);
        search.push(start, 0);
        search
    }

    fn push(&mut self, node: NodeId, distance: u64) {
        self.queue.push(QueueEntry {
            distance,
            seq: self.pushes,
            node,
        });
        self.pushes += 1;
    }

    /// Runs until `target` is settled or the queue is exhausted.
    ///
    /// Returns true if the target was settled. With no target the search
    /// always runs to exhaustion.
    fn run(&mut self, target: Option<NodeId>) -> Result<bool> {
        while let Some(QueueEntry { distance, node, .. }) = self.queue.pop() {
            if self.visited[node.index()] {
                continue;
            }
            self.visited[node.index()] = true;
            self.settled.push(node);

            if Some(node) == target {
                return Ok(true);
            }

            for (neighbor, weight) in self.graph.out_edges(node) {
                let candidate = distance.checked_add(u64::from(weight)).ok_or_else(|| {
                    GraphError::DistanceOverflow {
                        node: self.graph.graph[neighbor].clone(),
                    }
                })?;

                let improves = match self.distance[neighbor.index()] {
                    Some(current) => candidate < current,
                    None => true,
                };
                if improves {
                    trace!(
                        "relax {} -> {} = {}",
                        self.graph.graph[node],
                        self.graph.graph[neighbor],
                        candidate
                    );
                    self.distance[neighbor.index()] = Some(candidate);
                    self.previous[neighbor.index()] = Some(node);
                    self.push(neighbor, candidate);
                }
            }
        }

        Ok(false)
    }

    /// Walks predecessor links back from `target` and returns labels
    /// in start-to-target order.
    fn path_to(&self, target: NodeId) -> Vec<String> {
        let mut path = vec![self.graph.graph[target].clone()];
        let mut current = target;

        while current != self.start {
            match self.previous[current.index()] {
                Some(prev) => {
                    path.push(self.graph.graph[prev].clone());
                    current = prev;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}

impl ShortestPathGraph {
    /// Finds the minimum-weight path from `start` to `target`.
    ///
    /// Unknown labels yield [`PathResult::NotFound`] and a disconnected
    /// target yields [`PathResult::Unreachable`]; the only error is a
    /// distance that no longer fits in a `u64`.
    pub fn shortest_path(&self, start: &str, target: &str) -> Result<PathResult> {
        let (from, to) = match (self.get_index(start), self.get_index(target)) {
            (Some(from), Some(to)) => (from, to),
            (from, to) => {
                let mut missing = Vec::new();
                if from.is_none() {
                    missing.push(start.to_string());
                }
                if to.is_none() && start != target {
                    missing.push(target.to_string());
                }
                debug!("Path query {} -> {}: unknown {:?}", start, target, missing);
                return Ok(PathResult::NotFound {
                    missing,
                    known: self.labels().to_vec(),
                });
            }
        };

        let mut search = Search::new(self, from);
        let reached = search.run(Some(to))?;

        let result = if reached {
            PathResult::Found {
                path: search.path_to(to),
                total_weight: search.distance[to.index()].unwrap_or_default(),
            }
        } else {
            PathResult::Unreachable {
                start: start.to_string(),
                target: target.to_string(),
            }
        };

        debug!(
            "Path query {} -> {}: {} after settling {} of {} nodes",
            start,
            target,
            result.status(),
            search.settled.len(),
            self.node_count()
        );

        Ok(result)
    }

    /// Computes the final distance from `start` to every reachable node.
    ///
    /// Returns `None` if `start` is not in the graph.
    pub fn distances_from(&self, start: &str) -> Result<Option<Distances>> {
        let Some(from) = self.get_index(start) else {
            return Ok(None);
        };

        let mut search = Search::new(self, from);
        search.run(None)?;

        let entries = search
            .settled
            .iter()
            .filter_map(|&node| {
                search.distance[node.index()].map(|distance| (self.graph[node].clone(), distance))
            })
            .collect();

        debug!(
            "Distances from {}: {} of {} nodes reachable",
            start,
            search.settled.len(),
            self.node_count()
        );

        Ok(Some(Distances {
            start: start.to_string(),
            entries,
        }))
    }
}
