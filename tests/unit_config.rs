// tests/unit_config.rs
use std::fs;
use std::path::PathBuf;

use depgraph_core::cli::Cli;
use depgraph_core::config::Config;
use depgraph_core::naming::NameMatching;
use depgraph_core::DepGraphError;

#[test]
fn test_defaults() {
    let c = Config::default();
    assert_eq!(c.top_packages, 500);
    assert_eq!(c.top_packages_file, PathBuf::from("res/top-pypi-packages-30-days.json"));
    assert_eq!(c.packages_file, PathBuf::from("res/packages.json"));
    assert_eq!(c.nodes_path(), PathBuf::from("build/nodes.json"));
    assert_eq!(c.edges_path(), PathBuf::from("build/edges.json"));
    assert_eq!(c.name_matching, NameMatching::Exact);
    assert!(c.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let c = Config::parse_toml("top_packages = 100\nname_matching = \"pep503\"").unwrap();
    assert_eq!(c.top_packages, 100);
    assert_eq!(c.name_matching, NameMatching::Pep503);
    assert_eq!(c.output_dir, PathBuf::from("build"));
}

#[test]
fn test_invalid_toml() {
    assert!(matches!(
        Config::parse_toml("top_packages = \"many\"").unwrap_err(),
        DepGraphError::InvalidConfig(_)
    ));
}

#[test]
fn test_save_and_load_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("depgraph.toml");
    let mut c = Config::new();
    c.top_packages = 42;
    c.pretty = true;
    c.save(&path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("top_packages = 42"));
    assert_eq!(Config::load_file(&path).unwrap(), c);
}

#[test]
fn test_load_missing_file() {
    let d = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load_file(&d.path().join("nope.toml")).unwrap_err(),
        DepGraphError::NotFound { .. }
    ));
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut c = Config::new();
    c.top_packages = 0;
    assert!(c.validate().is_err());

    let mut c = Config::new();
    c.edges_file = " ".into();
    assert!(c.validate().is_err());

    let mut c = Config::new();
    c.edges_file = c.nodes_file.clone();
    assert!(c.validate().is_err());
}

#[test]
fn test_cli_overrides() {
    let cli = Cli {
        top: Some(10),
        output_dir: Some(PathBuf::from("out")),
        name_matching: Some(NameMatching::Pep503),
        dry_run: true,
        ..Cli::default()
    };
    let mut c = Config::parse_toml("top_packages = 100\npretty = true").unwrap();
    cli.apply_to(&mut c);
    assert_eq!(c.top_packages, 10);
    assert_eq!(c.nodes_path(), PathBuf::from("out/nodes.json"));
    assert_eq!(c.name_matching, NameMatching::Pep503);
    assert!(c.pretty);
    assert!(c.dry_run);
    assert_eq!(c.packages_file, PathBuf::from("res/packages.json"));
}
