// src/output.rs
//! Serialization of the graph into `nodes.json` and `edges.json`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{DependencyGraph, Edge, NodeId};
use crate::json_io;
use crate::top_set::TopSet;

/// One entry of the nodes file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub label: String,
    pub download_count: u64,
}

/// One entry of the edges file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
}

impl From<Edge> for EdgeRecord {
    fn from(e: Edge) -> Self {
        Self {
            from: e.from,
            to: e.to,
        }
    }
}

/// Where and how to write the graph.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    pub pretty: bool,
}

/// Paths that were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub nodes: PathBuf,
    pub edges: PathBuf,
}

/// Nodes in id order. Unranked packages get a download count of 0.
#[must_use]
pub fn node_records(graph: &DependencyGraph, top: &TopSet) -> Vec<NodeRecord> {
    graph
        .nodes
        .iter()
        .map(|(id, label)| NodeRecord {
            id,
            label: label.to_string(),
            download_count: top.download_count(label),
        })
        .collect()
}

#[must_use]
pub fn edge_records(graph: &DependencyGraph) -> Vec<EdgeRecord> {
    graph.edges.iter().map(EdgeRecord::from).collect()
}

/// Writes both files. Parent directories are created as needed.
///
/// Both files are staged first. A failed call never leaves one freshly
/// written file without the other.
///
/// # Errors
/// Returns `Io` if either file cannot be written.
pub fn write_graph(
    graph: &DependencyGraph,
    top: &TopSet,
    opts: &OutputOptions,
) -> Result<WrittenFiles> {
    let nodes = json_io::stage_json(&opts.nodes_path, &node_records(graph, top), opts.pretty)?;
    let edges = match json_io::stage_json(&opts.edges_path, &edge_records(graph), opts.pretty) {
        Ok(staged) => staged,
        Err(e) => {
            nodes.discard();
            return Err(e);
        }
    };

    if let Err(e) = edges.commit() {
        nodes.discard();
        return Err(e);
    }
    if let Err(e) = nodes.commit() {
        let _ = fs::remove_file(&opts.edges_path);
        return Err(e);
    }
    tracing::debug!(
        nodes = %opts.nodes_path.display(),
        edges = %opts.edges_path.display(),
        "wrote graph"
    );
    Ok(WrittenFiles {
        nodes: opts.nodes_path.clone(),
        edges: opts.edges_path.clone(),
    })
}
