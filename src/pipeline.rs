// src/pipeline.rs
//! The end-to-end conversion: load, build, write.

use crate::config::Config;
use crate::error::Result;
use crate::graph::{build_graph, BuildStats};
use crate::output::{self, WrittenFiles};
use crate::registry;
use crate::top_set;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub top_packages: usize,
    pub nodes: usize,
    pub edges: usize,
    pub stats: BuildStats,
    /// `None` for dry runs.
    pub written: Option<WrittenFiles>,
}

/// Runs the whole conversion. Nothing is written unless the graph builds.
///
/// # Errors
/// Returns the first configuration, input or I/O error encountered.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let top = top_set::load_top_set(&config.top_packages_file, config.top_packages)?
        .with_matching(config.name_matching);
    let records = registry::load_registry(&config.packages_file)?;
    let graph = build_graph(&records, &top)?;

    let written = if config.dry_run {
        tracing::info!("dry run, skipping output");
        None
    } else {
        Some(output::write_graph(&graph, &top, &config.output_options())?)
    };

    Ok(RunSummary {
        top_packages: top.len(),
        nodes: graph.nodes.len(),
        edges: graph.edges.len(),
        stats: graph.stats,
        written,
    })
}
