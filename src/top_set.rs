// src/top_set.rs
//! The ranked set of most-downloaded packages.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DepGraphError, Result};
use crate::json_io;
use crate::naming::NameMatching;

/// Default number of ranked packages to consider.
pub const DEFAULT_TOP_PACKAGES: usize = 500;

/// One row of the ranked download statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPackageEntry {
    pub project: String,
    pub download_count: u64,
}

#[derive(Deserialize)]
struct RankedStats {
    rows: Vec<TopPackageEntry>,
}

/// The first N ranked packages, indexed by name.
///
/// Lookups go through the set's [`NameMatching`] policy. When two rows share a
/// key the later row replaces the earlier one but keeps its rank position.
#[derive(Debug, Clone, Default)]
pub struct TopSet {
    rows: Vec<TopPackageEntry>,
    index: IndexMap<String, usize>,
    matching: NameMatching,
}

impl TopSet {
    /// Builds a top set from ranked entries, keeping only the first `limit`.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = TopPackageEntry>, limit: usize) -> Self {
        let rows: Vec<_> = entries.into_iter().take(limit).collect();
        Self::indexed(rows, NameMatching::default())
    }

    /// Re-indexes the set under a different matching policy.
    #[must_use]
    pub fn with_matching(self, matching: NameMatching) -> Self {
        if matching == self.matching {
            return self;
        }
        Self::indexed(self.rows, matching)
    }

    fn indexed(rows: Vec<TopPackageEntry>, matching: NameMatching) -> Self {
        let mut index = IndexMap::with_capacity(rows.len());
        for (pos, row) in rows.iter().enumerate() {
            index.insert(matching.key(&row.project).into_owned(), pos);
        }
        Self {
            rows,
            index,
            matching,
        }
    }

    #[must_use]
    pub fn matching(&self) -> NameMatching {
        self.matching
    }

    /// Number of distinct packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&*self.matching.key(name))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TopPackageEntry> {
        self.index
            .get(&*self.matching.key(name))
            .map(|&pos| &self.rows[pos])
    }

    /// Download count for `name`, or 0 when it is not ranked.
    #[must_use]
    pub fn download_count(&self, name: &str) -> u64 {
        self.get(name).map_or(0, |e| e.download_count)
    }

    /// Distinct entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &TopPackageEntry> {
        self.index.values().map(|&pos| &self.rows[pos])
    }
}

/// Loads the top `limit` packages from a ranked statistics file.
///
/// # Errors
/// Returns `InvalidConfig` for a zero limit, `NotFound` if the file is
/// missing and `Malformed` if it lacks a `rows` array of
/// `{project, download_count}` records.
pub fn load_top_set(path: &Path, limit: usize) -> Result<TopSet> {
    if limit == 0 {
        return Err(DepGraphError::InvalidConfig(
            "top package count must be positive".into(),
        ));
    }

    let stats: RankedStats = json_io::read_json(path)?;
    let available = stats.rows.len();
    let top = TopSet::from_entries(stats.rows, limit);
    tracing::debug!(
        available,
        kept = top.len(),
        path = %path.display(),
        "loaded ranked packages"
    );
    Ok(top)
}
