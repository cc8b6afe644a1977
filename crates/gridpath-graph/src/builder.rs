//! Graph builder for loading edge lists.
//!
//! An edge list has one edge per line: `SOURCE DEST [WEIGHT]`, separated
//! by whitespace. A missing weight means 1. Blank lines and lines starting
//! with `#` are ignored.

use crate::edge::GraphEdge;
use crate::error::{GraphError, Result};
use crate::graph::{GraphConfig, ShortestPathGraph};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// How labels read from an edge list are normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCase {
    /// Keep labels exactly as written.
    #[default]
    Preserve,
    /// Upper-case every label.
    Upper,
}

impl LabelCase {
    pub fn apply(&self, label: &str) -> String {
        match self {
            LabelCase::Preserve => label.to_string(),
            LabelCase::Upper => label.to_uppercase(),
        }
    }
}

/// Options for loading an edge list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    #[serde(flatten)]
    pub config: GraphConfig,
    pub label_case: LabelCase,
}

/// Parses one edge-list line.
///
/// `line_no` is 1-based and only used in error messages. Returns
/// `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str, line_no: usize, case: LabelCase) -> Result<Option<GraphEdge>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let weight = match tokens.len() {
        2 => 1,
        3 => tokens[2].parse::<u32>().map_err(|e| {
            GraphError::malformed(line_no, line, format!("invalid weight {:?}: {}", tokens[2], e))
        })?,
        n => {
            return Err(GraphError::malformed(
                line_no,
                line,
                format!("expected 2 or 3 fields, found {}", n),
            ))
        }
    };

    Ok(Some(GraphEdge::new(
        case.apply(tokens[0]),
        case.apply(tokens[1]),
        weight,
    )))
}

/// Builds a ShortestPathGraph from edge-list input.
///
/// A malformed line aborts the load with an error naming the line; the
/// partially built graph is discarded.
pub struct GraphBuilder {
    graph: ShortestPathGraph,
    label_case: LabelCase,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new(options: LoadOptions) -> Self {
        Self {
            graph: ShortestPathGraph::with_config(options.config),
            label_case: options.label_case,
        }
    }

    /// Adds one already-parsed edge.
    pub fn add_edge(&mut self, edge: &GraphEdge) -> &mut Self {
        self.graph.add_graph_edge(edge);
        self
    }

    /// Reads every line of an edge list into the graph.
    ///
    /// Line numbers in errors count from the start of this reader.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<&mut Self> {
        self.read_lines(reader, None)?;
        Ok(self)
    }

    /// Reads an edge-list file into the graph.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let lines = self.read_lines(BufReader::new(file), Some(path))?;
        debug!(
            "Loaded {}: {} lines, {} nodes, {} edges",
            path.display(),
            lines,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(self)
    }

    /// Adds each line of `reader`, returning how many lines were read.
    fn read_lines<R: BufRead>(&mut self, reader: R, path: Option<&Path>) -> Result<usize> {
        let mut count = 0;
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|source| GraphError::Read {
                path: path.map(Path::to_path_buf),
                line: line_no,
                source,
            })?;
            if let Some(edge) = parse_line(&line, line_no, self.label_case)? {
                self.graph.add_graph_edge(&edge);
            }
            count = line_no;
        }
        Ok(count)
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> ShortestPathGraph {
        self.graph
    }
}
