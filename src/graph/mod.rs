// src/graph/mod.rs
pub mod builder;
pub mod edges;
pub mod node_table;

pub use builder::{build_graph, GraphBuilder};
pub use edges::{Edge, EdgeSet};
pub use node_table::{NodeId, NodeTable};

/// Counters collected during a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub records_scanned: usize,
    pub records_matched: usize,
    pub requirements_parsed: usize,
    pub duplicate_edges: usize,
}

/// Nodes and edges of the top-set dependency graph.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub nodes: NodeTable,
    pub edges: EdgeSet,
    pub stats: BuildStats,
}

impl DependencyGraph {
    /// Direct dependencies of `name`, in edge insertion order.
    #[must_use]
    pub fn dependencies(&self, name: &str) -> Vec<&str> {
        let Some(id) = self.nodes.get(name) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|e| e.from == id)
            .filter_map(|e| self.nodes.label(e.to))
            .collect()
    }

    /// Packages that depend directly on `name`.
    #[must_use]
    pub fn dependents(&self, name: &str) -> Vec<&str> {
        let Some(id) = self.nodes.get(name) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|e| e.to == id)
            .filter_map(|e| self.nodes.label(e.from))
            .collect()
    }

    /// True if every edge endpoint has a node.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.edges
            .iter()
            .all(|e| self.nodes.contains_id(e.from) && self.nodes.contains_id(e.to))
    }
}
