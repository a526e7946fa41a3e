use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::naming::NameMatching;

#[derive(Parser, Debug, Default)]
#[command(
    name = "depgraph",
    version,
    about = "Builds a dependency graph of the most-downloaded PyPI packages"
)]
pub struct Cli {
    /// Number of ranked packages to include
    #[arg(long, short = 'n', value_name = "N")]
    pub top: Option<usize>,
    /// Ranked download statistics (JSON with a `rows` array)
    #[arg(long, value_name = "FILE")]
    pub top_packages_file: Option<PathBuf>,
    /// Registry snapshot with `requires_dist` per package
    #[arg(long, value_name = "FILE")]
    pub packages_file: Option<PathBuf>,
    /// Directory for nodes.json and edges.json
    #[arg(long, short, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// How requirement names are matched against ranked names
    #[arg(long, value_enum)]
    pub name_matching: Option<NameMatching>,
    /// Read settings from this file instead of ./depgraph.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Indent the output JSON
    #[arg(long)]
    pub pretty: bool,
    /// Build the graph without writing output files
    #[arg(long)]
    pub dry_run: bool,
    /// Write a default depgraph.toml and exit
    #[arg(long)]
    pub init: bool,
    /// Enable debug logging
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Only log errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Overrides file settings with the flags given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(n) = self.top {
            config.top_packages = n;
        }
        if let Some(p) = &self.top_packages_file {
            config.top_packages_file.clone_from(p);
        }
        if let Some(p) = &self.packages_file {
            config.packages_file.clone_from(p);
        }
        if let Some(d) = &self.output_dir {
            config.output_dir.clone_from(d);
        }
        if let Some(m) = self.name_matching {
            config.name_matching = m;
        }
        config.pretty |= self.pretty;
        config.dry_run = self.dry_run;
    }
}
