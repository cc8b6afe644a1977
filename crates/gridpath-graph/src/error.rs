//! Error types for graph loading and queries.
//!
//! An unknown or unreachable endpoint is not an error: those outcomes are
//! ordinary [`PathResult`](crate::PathResult) variants.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}{}: {source}", in_file(.path))]
    Read {
        path: Option<PathBuf>,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed edge on line {line}: {reason} ({content:?})")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Distance overflow while relaxing edges into {node}")]
    DistanceOverflow { node: String },
}

impl GraphError {
    pub(crate) fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

fn in_file(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p: &Path| format!(" of {}", p.display()))
        .unwrap_or_default()
}
