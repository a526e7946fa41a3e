// src/cli/mod.rs
//! Command line entry points.

pub mod args;

pub use args::Cli;

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{Config, CONFIG_FILE};
use crate::pipeline::{self, RunSummary};

/// Resolves the effective configuration: file first, then flags.
///
/// # Errors
/// Returns error if the config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_local().context("Failed to load depgraph.toml")?,
    };
    cli.apply_to(&mut config);
    Ok(config)
}

/// Handles `--init`: writes a default config unless one exists.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn handle_init() -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        println!("{} already exists", CONFIG_FILE.yellow());
        return Ok(());
    }
    Config::new()
        .save(path)
        .with_context(|| format!("Failed to write {CONFIG_FILE}"))?;
    println!("{} {}", "✓ Created".green().bold(), CONFIG_FILE);
    Ok(())
}

/// Runs the conversion and prints the summary.
///
/// # Errors
/// Returns error if loading, building or writing fails.
pub fn handle_run(config: &Config) -> Result<RunSummary> {
    let summary = pipeline::run(config).context("Dependency graph conversion failed")?;
    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    println!("Found {} packages", summary.nodes.to_string().bold());
    println!(
        "   {} dependency edges from {} of {} ranked packages",
        summary.edges,
        summary.stats.records_matched,
        summary.top_packages
    );
    match &summary.written {
        Some(files) => println!(
            "{} {} and {}",
            "✓ Wrote".green().bold(),
            files.nodes.display(),
            files.edges.display()
        ),
        None => println!("{}", "(dry run, nothing written)".dimmed()),
    }
}
