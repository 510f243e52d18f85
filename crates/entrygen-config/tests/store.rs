//! Tests for configuration loading, layering and caching.

use entrygen_config::{ConfigError, ConfigStore, RawConfig, WATCH_ENV_VAR};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("rollup.json");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn list_fields_are_always_sequences() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
  "input": "src",
  "output": "dist",
  "formats": false,
  "watch": "styles",
  "ext": ".ts"
}"#,
    );

    let config = ConfigStore::new(RawConfig::default()).load(&path).unwrap();

    assert_eq!(config.input_dirs, vec![PathBuf::from("src")]);
    assert_eq!(config.output_dirs, vec![PathBuf::from("dist")]);
    assert!(config.formats.is_empty());
    assert_eq!(config.watch_dirs, vec![PathBuf::from("styles")]);
    assert_eq!(config.extensions, vec![".ts"]);
}

#[test]
fn repeated_loads_are_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "formats": ["es", "iife"], "prod": false }"#);

    let mut store = ConfigStore::new(RawConfig::default());
    let first = store.load(&path).unwrap();
    let second = store.load(&path).unwrap();

    assert!(store.is_cached(&path));
    assert_eq!(first.formats, second.formats);
    assert_eq!(first.is_production, second.is_production);
    assert_eq!(first.live_reload, second.live_reload);
}

#[test]
fn keys_are_cached_independently() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, r#"{ "out": ".a.js" }"#).unwrap();
    fs::write(&b, r#"{ "out": ".b.js" }"#).unwrap();

    let mut store = ConfigStore::new(RawConfig::default());
    assert_eq!(store.load(&a).unwrap().output_suffix, ".a.js");
    assert_eq!(store.load(&b).unwrap().output_suffix, ".b.js");
}

#[test]
fn parse_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "input": ["src", }"#);

    let err = ConfigStore::new(RawConfig::default()).load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("rollup.json"));
}

#[test]
fn non_string_ignore_entries_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "ignore": [1] }"#);

    let err = ConfigStore::new(RawConfig::default()).load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
#[serial]
fn env_overrides_win_over_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "prod": true, "out": ".js" }"#);

    unsafe {
        env::set_var("ENTRYGEN_TEST_PROD", "false");
        env::set_var("ENTRYGEN_TEST_OUT", ".dev.js");
    }
    let config = ConfigStore::new(RawConfig::default())
        .with_env_prefix("ENTRYGEN_TEST_")
        .load(&path);
    unsafe {
        env::remove_var("ENTRYGEN_TEST_PROD");
        env::remove_var("ENTRYGEN_TEST_OUT");
    }

    let config = config.unwrap();
    assert!(!config.is_production);
    assert_eq!(config.output_suffix, ".dev.js");
}

#[test]
#[serial]
fn env_is_ignored_without_prefix() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "out": ".js" }"#);

    unsafe {
        env::set_var("ENTRYGEN_TEST_OUT", ".dev.js");
    }
    let config = ConfigStore::new(RawConfig::default()).load(&path);
    unsafe {
        env::remove_var("ENTRYGEN_TEST_OUT");
    }

    assert_eq!(config.unwrap().output_suffix, ".js");
}

#[test]
#[serial]
fn watch_env_selects_development_defaults() {
    unsafe {
        env::set_var(WATCH_ENV_VAR, "true");
    }
    let watching = RawConfig::from_env();
    unsafe {
        env::remove_var(WATCH_ENV_VAR);
    }
    let building = RawConfig::from_env();

    assert!(!watching.prod);
    assert!(building.prod);
}
