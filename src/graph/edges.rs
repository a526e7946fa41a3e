// src/graph/edges.rs
//! Deduplicated directed edges.

use std::collections::HashSet;

use serde::Serialize;

use super::node_table::NodeId;

/// Dependent → dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    #[must_use]
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// Set of unique edges. Iterates in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    seen: HashSet<Edge>,
    order: Vec<Edge>,
}

impl EdgeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an edge. Returns false if it was already present.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if !self.seen.insert(edge) {
            return false;
        }
        self.order.push(edge);
        true
    }

    #[must_use]
    pub fn contains(&self, edge: Edge) -> bool {
        self.seen.contains(&edge)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.order.iter().copied()
    }
}
