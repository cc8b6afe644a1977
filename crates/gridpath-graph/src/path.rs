//! Query results.
//!
//! A query never fails because an endpoint is missing or unreachable;
//! those outcomes are variants of [`PathResult`] so callers can report
//! them alongside successful paths.

use serde::{Deserialize, Serialize};

/// Outcome of a point-to-point shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    /// A shortest path, listed from start to target inclusive.
    Found { path: Vec<String>, total_weight: u64 },

    /// Both endpoints exist but no path connects them.
    Unreachable { start: String, target: String },

    /// One or both endpoints were never inserted.
    NotFound {
        missing: Vec<String>,
        known: Vec<String>,
    },
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    /// The node sequence of a found path.
    pub fn path(&self) -> Option<&[String]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Total weight of a found path.
    pub fn total_weight(&self) -> Option<u64> {
        match self {
            PathResult::Found { total_weight, .. } => Some(*total_weight),
            _ => None,
        }
    }

    /// Number of edges on a found path.
    pub fn hops(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }

    /// Returns a short status word suitable for CLI output.
    pub fn status(&self) -> &'static str {
        match self {
            PathResult::Found { .. } => "found",
            PathResult::Unreachable { .. } => "unreachable",
            PathResult::NotFound { .. } => "not_found",
        }
    }
}

impl std::fmt::Display for PathResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathResult::Found { path, total_weight } => {
                write!(f, "{} (weight {})", path.join(" -> "), total_weight)
            }
            PathResult::Unreachable { start, target } => {
                write!(f, "{} is not reachable from {}", target, start)
            }
            PathResult::NotFound { missing, known } => {
                write!(
                    f,
                    "unknown node(s) {}; known nodes: [{}]",
                    missing.join(", "),
                    known.join(", ")
                )
            }
        }
    }
}

/// Final distances from one start node, in the order nodes were settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distances {
    pub start: String,
    pub entries: Vec<(String, u64)>,
}

impl Distances {
    /// Distance to a label, if it is reachable.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, distance)| *distance)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(name, distance)| (name.as_str(), *distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found() -> PathResult {
        PathResult::Found {
            path: vec!["A".into(), "C".into(), "B".into()],
            total_weight: 3,
        }
    }

    #[test]
    fn test_found_accessors() {
        let result = found();

        assert!(result.is_found());
        assert_eq!(result.total_weight(), Some(3));
        assert_eq!(result.hops(), Some(2));
        assert_eq!(result.status(), "found");
        assert_eq!(result.to_string(), "A -> C -> B (weight 3)");
    }

    #[test]
    fn test_failure_rendering() {
        let unreachable = PathResult::Unreachable {
            start: "A".into(),
            target: "Z".into(),
        };
        assert_eq!(unreachable.to_string(), "Z is not reachable from A");
        assert_eq!(unreachable.path(), None);

        let missing = PathResult::NotFound {
            missing: vec!["Q".into()],
            known: vec!["A".into(), "B".into()],
        };
        assert_eq!(
            missing.to_string(),
            "unknown node(s) Q; known nodes: [A, B]"
        );
        assert_eq!(missing.hops(), None);
    }

    #[test]
    fn test_json_is_tagged_by_status() {
        let value = serde_json::to_value(found()).unwrap();

        assert_eq!(value["status"], "found");
        assert_eq!(value["total_weight"], 3);
        assert_eq!(value["path"][1], "C");
    }

    #[test]
    fn test_distances_lookup() {
        let distances = Distances {
            start: "A".into(),
            entries: vec![("A".into(), 0), ("C".into(), 2)],
        };

        assert_eq!(distances.get("C"), Some(2));
        assert_eq!(distances.get("B"), None);
        assert_eq!(distances.len(), 2);
        assert_eq!(distances.iter().last(), Some(("C", 2)));
    }
}
