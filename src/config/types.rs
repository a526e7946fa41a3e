use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::naming::NameMatching;
use crate::top_set::DEFAULT_TOP_PACKAGES;

/// Settings for one conversion run, read from `depgraph.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_top_packages")]
    pub top_packages: usize,
    #[serde(default = "default_top_packages_file")]
    pub top_packages_file: PathBuf,
    #[serde(default = "default_packages_file")]
    pub packages_file: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_nodes_file")]
    pub nodes_file: String,
    #[serde(default = "default_edges_file")]
    pub edges_file: String,
    #[serde(default)]
    pub name_matching: NameMatching,
    #[serde(default)]
    pub pretty: bool,
    /// Build the graph but skip writing output. Command line only.
    #[serde(skip)]
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_packages: default_top_packages(),
            top_packages_file: default_top_packages_file(),
            packages_file: default_packages_file(),
            output_dir: default_output_dir(),
            nodes_file: default_nodes_file(),
            edges_file: default_edges_file(),
            name_matching: NameMatching::default(),
            pretty: false,
            dry_run: false,
        }
    }
}

const fn default_top_packages() -> usize { DEFAULT_TOP_PACKAGES }
fn default_top_packages_file() -> PathBuf { PathBuf::from("res/top-pypi-packages-30-days.json") }
fn default_packages_file() -> PathBuf { PathBuf::from("res/packages.json") }
fn default_output_dir() -> PathBuf { PathBuf::from("build") }
fn default_nodes_file() -> String { "nodes.json".to_string() }
fn default_edges_file() -> String { "edges.json".to_string() }
