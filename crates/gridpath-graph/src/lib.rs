//! Gridpath Graph - labeled graphs with shortest-path queries
//!
//! Graphs are built from `(source, target, weight)` triples, either
//! programmatically or from an edge-list file, and answer point-to-point
//! shortest-path queries with Dijkstra's algorithm.
//!
//! # Example
//!
//! ```
//! use gridpath_graph::{PathResult, ShortestPathGraph};
//!
//! let mut graph = ShortestPathGraph::new(true, true);
//! graph.add_edge("A", "B", 5);
//! graph.add_edge("A", "C", 2);
//! graph.add_edge("C", "B", 1);
//!
//! let result = graph.shortest_path("A", "B").unwrap();
//! assert_eq!(result.total_weight(), Some(3));
//! assert!(matches!(result, PathResult::Found { .. }));
//! ```

mod builder;
mod dijkstra;
mod edge;
mod error;
mod graph;
mod labels;
mod path;

pub use builder::{parse_line, GraphBuilder, LabelCase, LoadOptions};
pub use edge::{Edge, GraphEdge};
pub use error::{GraphError, Result};
pub use graph::{GraphConfig, GraphStats, NodeId, ShortestPathGraph};
pub use labels::LabelTable;
pub use path::{Distances, PathResult};
