use crate::graph::NodeId;
use std::collections::HashMap;

/// Maps node labels to their graph indexes.
///
/// Registration order is kept so that "known labels" listings come out
/// the same way every run.
#[derive(Debug, Default, Clone)]
pub struct LabelTable {
    by_label: HashMap<String, NodeId>,
    order: Vec<String>,
}

impl LabelTable {
    /// Creates a new empty label table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a label. Returns false if it was already present.
    pub fn insert(&mut self, label: &str, id: NodeId) -> bool {
        if self.by_label.contains_key(label) {
            return false;
        }
        self.by_label.insert(label.to_string(), id);
        self.order.push(label.to_string());
        true
    }

    /// Resolves a label to its node index.
    pub fn resolve(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    /// Labels in registration order.
    pub fn labels(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_resolve() {
        let mut table = LabelTable::new();
        let id = NodeId::new(1);

        assert!(table.insert("0,0", id));

        assert_eq!(table.resolve("0,0"), Some(id));
        assert_eq!(table.resolve("0,1"), None);
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut table = LabelTable::new();

        assert!(table.insert("A", NodeId::new(0)));
        assert!(!table.insert("A", NodeId::new(7)));

        assert_eq!(table.resolve("A"), Some(NodeId::new(0)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_labels_in_registration_order() {
        let mut table = LabelTable::new();
        table.insert("C", NodeId::new(0));
        table.insert("A", NodeId::new(1));
        table.insert("B", NodeId::new(2));

        assert_eq!(table.labels(), ["C", "A", "B"]);
    }
}
