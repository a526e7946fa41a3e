// src/lib.rs
//! Builds a dependency graph of the most-downloaded PyPI packages.
//!
//! The pipeline reads a ranked download list and a registry snapshot,
//! keeps the top N packages, and writes their dependency graph as
//! `nodes.json` and `edges.json`.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod json_io;
pub mod logger;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod requirement;
pub mod top_set;

pub use error::{DepGraphError, Result};
