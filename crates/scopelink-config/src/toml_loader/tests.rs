//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_scopelink_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, scopelink_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[reporter]
tick_interval_ms = 500
onfire_threshold = 20

[presence]
client_id = "9876543210"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.reporter.tick_interval_ms, 500);
    assert_eq!(config.reporter.onfire_threshold, 20);
    assert_eq!(config.presence.client_id, "9876543210");
    // Defaults preserved
    assert_eq!(config.reporter.snapshot_every, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, scopelink_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[reporter]
snapshot_every = 0
"#,
    )
    .unwrap();

    // Validation failures are logged, not fatal; parsed values returned
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.reporter.snapshot_every, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scopelink").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.reporter.tick_interval_ms, 1000);
    assert!(config.presence.enabled);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ScopelinkConfig;

    let content = default_config_toml();
    let config: ScopelinkConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.reporter.onfire_threshold, 10);
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("scopelink"));
        assert!(path_str.ends_with("config.toml"));
    }
}
