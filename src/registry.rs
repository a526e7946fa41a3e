// src/registry.rs
//! Loading of the package registry snapshot.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::json_io;

/// Dependency declarations of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requires_dist: Vec<String>,
}

impl PackageRecord {
    pub fn new<I, S>(name: impl Into<String>, requires_dist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            requires_dist: requires_dist.into_iter().map(Into::into).collect(),
        }
    }
}

// PyPI metadata reports packages without dependencies as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A snapshot is either keyed by package or a plain list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Keyed(IndexMap<String, PackageRecord>),
    Listed(Vec<PackageRecord>),
}

/// Loads all package records in file order.
///
/// For keyed snapshots the record's own `name` field is authoritative; the
/// key is ignored.
///
/// # Errors
/// Returns `NotFound` if the file is missing and `Malformed` if it is
/// neither an object nor an array of `{name, requires_dist}` records.
pub fn load_registry(path: &Path) -> Result<Vec<PackageRecord>> {
    let records = match json_io::read_json::<Snapshot>(path)? {
        Snapshot::Keyed(map) => map.into_values().collect::<Vec<_>>(),
        Snapshot::Listed(list) => list,
    };
    tracing::debug!(count = records.len(), path = %path.display(), "loaded package records");
    Ok(records)
}
