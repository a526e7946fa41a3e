// src/graph/builder.rs
//! Graph construction: filtering by the top set and edge building.

use crate::error::{DepGraphError, Result};
use crate::registry::PackageRecord;
use crate::requirement::parse_req;
use crate::top_set::TopSet;

use super::edges::{Edge, EdgeSet};
use super::node_table::NodeTable;
use super::{BuildStats, DependencyGraph};

/// Accumulates nodes and edges one package at a time.
pub struct GraphBuilder<'a> {
    top: &'a TopSet,
    nodes: NodeTable,
    edges: EdgeSet,
    stats: BuildStats,
}

impl<'a> GraphBuilder<'a> {
    #[must_use]
    pub fn new(top: &'a TopSet) -> Self {
        Self {
            top,
            nodes: NodeTable::new(),
            edges: EdgeSet::new(),
            stats: BuildStats::default(),
        }
    }

    /// Adds a package and its dependencies if the package is in the top set.
    ///
    /// Returns whether the package was included.
    ///
    /// # Errors
    /// Returns `UnparsableRequirement` if any of its requirements has no
    /// leading package name. Nothing is recorded for the package in that case.
    pub fn add_package(&mut self, record: &PackageRecord) -> Result<bool> {
        self.stats.records_scanned += 1;
        if !self.top.contains(&record.name) {
            return Ok(false);
        }
        self.stats.records_matched += 1;

        let deps = parse_all(record)?;
        self.stats.requirements_parsed += deps.len();

        let matching = self.top.matching();
        let from = self.nodes.get_or_assign(&matching.key(&record.name));
        for dep in deps {
            let to = self.nodes.get_or_assign(&matching.key(dep));
            if !self.edges.insert(Edge::new(from, to)) {
                self.stats.duplicate_edges += 1;
                tracing::trace!(package = %record.name, dependency = dep, "duplicate edge");
            }
        }
        Ok(true)
    }

    #[must_use]
    pub fn finish(self) -> DependencyGraph {
        DependencyGraph {
            nodes: self.nodes,
            edges: self.edges,
            stats: self.stats,
        }
    }
}

fn parse_all(record: &PackageRecord) -> Result<Vec<&str>> {
    record
        .requires_dist
        .iter()
        .map(|req| {
            parse_req(req).map_err(|e| DepGraphError::UnparsableRequirement {
                package: record.name.clone(),
                requirement: req.clone(),
                reason: match e {
                    DepGraphError::InvalidRequirement { reason, .. } => reason,
                    _ => "unrecognized requirement",
                },
            })
        })
        .collect()
}

/// Builds the dependency graph of the top-set packages in one pass over `records`.
///
/// # Errors
/// Fails on the first unparsable requirement of a top-set package.
pub fn build_graph(records: &[PackageRecord], top: &TopSet) -> Result<DependencyGraph> {
    let mut builder = GraphBuilder::new(top);
    for record in records {
        builder.add_package(record)?;
    }
    let graph = builder.finish();
    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        matched = graph.stats.records_matched,
        "built dependency graph"
    );
    Ok(graph)
}
