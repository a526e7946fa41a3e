// src/graph/node_table.rs
//! Insertion-ordered assignment of node identifiers.

use std::collections::HashMap;

/// 1-based node identifier.
pub type NodeId = usize;

/// Distinct package names in first-seen order plus a name → id index.
///
/// Ids start at 1 and are never reused or reassigned.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    names: Vec<String>,
    ids: HashMap<String, NodeId>,
}

impl NodeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, assigning the next one if it is new.
    pub fn get_or_assign(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        self.names.push(name.to_string());
        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        id
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    #[must_use]
    pub fn label(&self, id: NodeId) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|idx| self.names.get(idx))
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains_id(&self, id: NodeId) -> bool {
        id >= 1 && id <= self.names.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| (idx + 1, name.as_str()))
    }
}
