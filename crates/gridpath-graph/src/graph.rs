//! Core graph data structure.
//!
//! The ShortestPathGraph wraps petgraph and adds a label table so callers
//! can work with node labels instead of indexes. Queries live in
//! `dijkstra.rs`.

use crate::edge::{Edge, GraphEdge};
use crate::labels::LabelTable;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// Construction-time flags for a graph. Fixed for the graph's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// When false, every inserted edge is stored with weight 1.
    pub weighted: bool,

    /// When false, every inserted edge is also inserted in reverse.
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            weighted: true,
            directed: true,
        }
    }
}

/// A labeled graph answering point-to-point shortest-path queries.
///
/// Nodes are created implicitly by [`add_edge`](Self::add_edge); both
/// endpoints are registered, so a node with no outgoing edges can still
/// be queried. Queries take `&self` and allocate their own state, so a
/// built graph can be shared freely between threads.
#[derive(Debug, Default, Clone)]
pub struct ShortestPathGraph {
    /// The underlying petgraph graph. Node weights are labels.
    pub(crate) graph: DiGraph<String, u32>,

    /// Maps labels to graph node indexes.
    labels: LabelTable,

    config: GraphConfig,
}

impl ShortestPathGraph {
    /// Creates a new empty graph.
    pub fn new(weighted: bool, directed: bool) -> Self {
        Self::with_config(GraphConfig { weighted, directed })
    }

    /// Creates a new empty graph from a config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            graph: DiGraph::new(),
            labels: LabelTable::new(),
            config,
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Registers a node, returning its index. Existing labels are reused.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(index) = self.labels.resolve(label) {
            return index;
        }
        let index = self.graph.add_node(label.to_string());
        self.labels.insert(label, index);
        index
    }

    /// Adds an edge from `source` to `target`.
    ///
    /// Unweighted graphs store weight 1 whatever `weight` is. Undirected
    /// graphs also store the reverse arc with the same weight.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: u32) {
        let weight = if self.config.weighted { weight } else { 1 };

        let from = self.add_node(source);
        let to = self.add_node(target);

        self.graph.add_edge(from, to, weight);
        if !self.config.directed {
            self.graph.add_edge(to, from, weight);
        }
    }

    /// Adds a parsed edge-list entry.
    pub fn add_graph_edge(&mut self, edge: &GraphEdge) {
        self.add_edge(&edge.source, &edge.target, edge.weight);
    }

    /// Returns true if the label has been registered.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.resolve(label).is_some()
    }

    /// Gets the node index for a label.
    pub fn get_index(&self, label: &str) -> Option<NodeId> {
        self.labels.resolve(label)
    }

    /// Gets the label for a node index.
    pub fn label(&self, index: NodeId) -> Option<&str> {
        self.graph.node_weight(index).map(String::as_str)
    }

    /// All known labels, in the order they were first seen.
    pub fn labels(&self) -> &[String] {
        self.labels.labels()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of stored arcs. An undirected insertion counts twice.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing edges of a label, in insertion order.
    ///
    /// Returns `None` for an unknown label.
    pub fn neighbors(&self, label: &str) -> Option<Vec<Edge>> {
        let index = self.labels.resolve(label)?;
        Some(
            self.out_edges(index)
                .into_iter()
                .map(|(to, weight)| Edge::new(self.graph[to].clone(), weight))
                .collect(),
        )
    }

    /// Outgoing arcs of a node as `(target, weight)`, in insertion order.
    ///
    /// petgraph walks a node's edge list newest first; edge indexes grow
    /// monotonically, so sorting by them restores insertion order.
    pub(crate) fn out_edges(&self, index: NodeId) -> Vec<(NodeId, u32)> {
        let mut edges: Vec<_> = self.graph.edges(index).collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| (edge.target(), *edge.weight()))
            .collect()
    }

    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            weighted: self.config.weighted,
            directed: self.config.directed,
        }
    }
}

/// Graph statistics for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub weighted: bool,
    pub directed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph = ShortestPathGraph::new(true, true);
        graph.add_edge("A", "B", 4);

        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors("B"), Some(Vec::new()));
    }

    #[test]
    fn test_undirected_inserts_reverse_arc() {
        let mut graph = ShortestPathGraph::new(true, false);
        graph.add_edge("A", "B", 4);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("B"), Some(vec![Edge::new("A", 4)]));
    }

    #[test]
    fn test_unweighted_forces_weight_one() {
        let mut graph = ShortestPathGraph::new(false, true);
        graph.add_edge("A", "B", 9);

        assert_eq!(graph.neighbors("A"), Some(vec![Edge::new("B", 1)]));
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = ShortestPathGraph::new(true, true);
        graph.add_edge("A", "C", 1);
        graph.add_edge("A", "B", 2);
        graph.add_edge("A", "D", 3);

        let targets: Vec<_> = graph
            .neighbors("A")
            .unwrap()
            .into_iter()
            .map(|edge| edge.target)
            .collect();
        assert_eq!(targets, ["C", "B", "D"]);
    }

    #[test]
    fn test_labels_and_stats() {
        let mut graph = ShortestPathGraph::new(true, false);
        graph.add_edge("0,0", "0,1", 2);
        graph.add_edge("0,1", "1,1", 3);

        assert_eq!(graph.labels(), ["0,0", "0,1", "1,1"]);
        assert_eq!(
            graph.stats(),
            GraphStats {
                node_count: 3,
                edge_count: 4,
                weighted: true,
                directed: false,
            }
        );
        assert!(graph.neighbors("9,9").is_none());
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = ShortestPathGraph::default();
        let first = graph.add_node("A");
        let second = graph.add_node("A");

        assert_eq!(first, second);
        assert_eq!(graph.label(first), Some("A"));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShortestPathGraph>();
    }
}
