// tests/unit_top_set.rs
//! Tests for loading the ranked package list.

use std::fs;
use std::path::PathBuf;

use depgraph_core::top_set::{load_top_set, TopPackageEntry, TopSet};
use depgraph_core::DepGraphError;
use tempfile::TempDir;

const STATS: &str = r#"{
  "last_update": "2024-01-01 00:00:00",
  "rows": [
    {"download_count": 900, "project": "boto3"},
    {"download_count": 800, "project": "urllib3"},
    {"download_count": 700, "project": "requests"}
  ]
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_keeps_first_n_in_order() {
    let d = tempfile::tempdir().unwrap();
    let path = write(&d, "top.json", STATS);
    let top = load_top_set(&path, 2).unwrap();
    assert_eq!(top.len(), 2);
    assert!(top.contains("boto3"));
    assert!(top.contains("urllib3"));
    assert!(!top.contains("requests"));
    let order: Vec<_> = top.iter().map(|e| e.project.as_str()).collect();
    assert_eq!(order, vec!["boto3", "urllib3"]);
    assert_eq!(top.download_count("urllib3"), 800);
}

#[test]
fn test_limit_above_available_returns_all() {
    let d = tempfile::tempdir().unwrap();
    let path = write(&d, "top.json", STATS);
    let top = load_top_set(&path, 500).unwrap();
    assert_eq!(top.len(), 3);
}

#[test]
fn test_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let err = load_top_set(&d.path().join("nope.json"), 10).unwrap_err();
    assert!(matches!(err, DepGraphError::NotFound { .. }));
}

#[test]
fn test_missing_rows_is_malformed() {
    let d = tempfile::tempdir().unwrap();
    let path = write(&d, "top.json", r#"{"data": []}"#);
    let err = load_top_set(&path, 10).unwrap_err();
    assert!(matches!(err, DepGraphError::Malformed { .. }));
}

#[test]
fn test_row_without_download_count_is_malformed() {
    let d = tempfile::tempdir().unwrap();
    let path = write(&d, "top.json", r#"{"rows": [{"project": "six"}]}"#);
    assert!(matches!(
        load_top_set(&path, 10).unwrap_err(),
        DepGraphError::Malformed { .. }
    ));
}

#[test]
fn test_invalid_json_is_malformed() {
    let d = tempfile::tempdir().unwrap();
    let path = write(&d, "top.json", "{ rows: ");
    assert!(matches!(
        load_top_set(&path, 10).unwrap_err(),
        DepGraphError::Malformed { .. }
    ));
}

#[test]
fn test_zero_limit_rejected() {
    let d = tempfile::tempdir().unwrap();
    let path = write(&d, "top.json", STATS);
    assert!(matches!(
        load_top_set(&path, 0).unwrap_err(),
        DepGraphError::InvalidConfig(_)
    ));
}

#[test]
fn test_unranked_download_count_is_zero() {
    let top = TopSet::from_entries(
        vec![TopPackageEntry {
            project: "six".into(),
            download_count: 3,
        }],
        1,
    );
    assert_eq!(top.download_count("six"), 3);
    assert_eq!(top.download_count("seven"), 0);
    assert!(top.get("seven").is_none());
}
