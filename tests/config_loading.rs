//! Integration tests for loading the shipped config and test fixtures.

use std::path::Path;

use endpoint_scout::config::load_config;
use endpoint_scout::error::ScoutError;
use endpoint_scout::generator::generate_combinations;

fn manifest_path(rel: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(rel)
}

#[test]
fn shipped_config_loads() {
    let config = load_config(&manifest_path("endpoints_config.toml")).unwrap();
    assert!(!config.snippets.versions.is_empty());
    assert!(!config.snippets.resources.is_empty());
    assert!(!config.full.known.is_empty());

    let combos: Vec<String> = generate_combinations(&config).collect();
    assert_eq!(combos.len(), config.combination_count());
    assert!(!combos.iter().any(String::is_empty));
}

#[test]
fn snippet_fixture_generates_three_candidates() {
    let config = load_config(&manifest_path("tests/fixtures/snippets.toml")).unwrap();
    let combos: Vec<String> = generate_combinations(&config).collect();
    assert_eq!(combos, vec!["/v1/users", "/v1", "/users"]);
}

#[test]
fn known_only_fixture_keeps_order() {
    let config = load_config(&manifest_path("tests/fixtures/known_only.toml")).unwrap();
    assert_eq!(config.full.known, vec!["/api", "/v9/dashboard", "/missing"]);
    assert_eq!(generate_combinations(&config).count(), 0);
}

#[test]
fn malformed_fixture_is_a_parse_error() {
    let err = load_config(&manifest_path("tests/fixtures/malformed.toml")).unwrap_err();
    assert!(matches!(err, ScoutError::ConfigParse { .. }));
}
