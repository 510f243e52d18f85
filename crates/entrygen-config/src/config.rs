//! Normalized build configuration.
//!
//! This module provides the strongly-typed [`BuildConfig`] produced from a
//! [`RawConfig`]. For loading and caching, see the `store` module.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::schema::{RawConfig, Shape};

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub is_production: bool,
    pub extensions: Vec<String>,
    pub output_suffix: String,
    pub ignore: Vec<Regex>,
    pub formats: Vec<String>,
    pub input_dirs: Vec<PathBuf>,
    pub output_dirs: Vec<PathBuf>,
    pub watch_dirs: Vec<PathBuf>,
    /// Paths handed to the live-reload plugin. Empty disables it.
    pub live_reload: Vec<String>,
    watch: OnceLock<Vec<PathBuf>>,
}

impl BuildConfig {
    /// Create from serde_json::Value, filling missing keys from the production defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use entrygen_config::BuildConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let config = BuildConfig::from_value(json!({
    ///     "input": "src",
    ///     "formats": ["es", "iife"]
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.input_dirs, vec![PathBuf::from("src")]);
    /// assert_eq!(config.formats, vec!["es", "iife"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawConfig = serde_json::from_value(value)
            .map_err(|e| ConfigError::invalid_value("config", e.to_string()))?;
        Self::try_from(raw)
    }

    /// Concrete directories to watch: inputs and extra watch paths that exist,
    /// with files replaced by their parent directory. Resolved once.
    pub fn watch(&self) -> &[PathBuf] {
        self.watch.get_or_init(|| {
            self.input_dirs
                .iter()
                .chain(&self.watch_dirs)
                .filter(|path| path.exists())
                .map(|path| resolve_watch_dir(path))
                .collect()
        })
    }
}

impl TryFrom<RawConfig> for BuildConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let input = raw.input.into_list("input")?;
        let output = raw.output.into_list("output")?;
        let formats = raw.formats.into_list("formats")?;
        let watch = raw.watch.into_list("watch")?;
        let extensions = raw.ext.into_list("ext")?;

        let live_reload = match raw.livereload {
            Shape::Flag(false) => Vec::new(),
            Shape::Flag(true) => output.clone(),
            Shape::One(target) => std::iter::once(target).chain(output.iter().cloned()).collect(),
            Shape::Many(mut targets) => {
                targets.extend(output.iter().cloned());
                targets
            }
        };

        let ignore = raw
            .ignore
            .into_iter()
            .map(|pattern| {
                Regex::new(&pattern)
                    .map_err(|source| ConfigError::InvalidPattern { pattern, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            is_production: raw.prod,
            extensions,
            output_suffix: raw.out,
            ignore,
            formats,
            input_dirs: input.into_iter().map(PathBuf::from).collect(),
            output_dirs: output.into_iter().map(PathBuf::from).collect(),
            watch_dirs: watch.into_iter().map(PathBuf::from).collect(),
            live_reload,
            watch: OnceLock::new(),
        })
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::try_from(RawConfig::default()).expect("built-in defaults are valid")
    }
}

fn resolve_watch_dir(path: &Path) -> PathBuf {
    let is_dir = fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false);
    if is_dir {
        path.to_path_buf()
    } else {
        path.parent().map(Path::to_path_buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_normalized() {
        let config = BuildConfig::default();
        assert!(config.is_production);
        assert_eq!(config.extensions, vec![".js", ".mjs", ".cjs"]);
        assert_eq!(config.output_suffix, ".js");
        assert_eq!(config.formats, vec!["es"]);
        assert_eq!(config.input_dirs, vec![PathBuf::from("assets")]);
        assert_eq!(config.output_dirs, vec![PathBuf::from("public/build")]);
        assert!(config.watch_dirs.is_empty());
        assert_eq!(config.live_reload, vec!["public/build"]);
        assert_eq!(config.ignore.len(), 2);
    }

    #[test]
    fn scalars_and_false_become_lists() {
        let config = BuildConfig::from_value(json!({
            "input": "src",
            "output": false,
            "formats": "iife",
            "watch": "lib",
            "ext": false,
            "livereload": false
        }))
        .unwrap();

        assert_eq!(config.input_dirs, vec![PathBuf::from("src")]);
        assert!(config.output_dirs.is_empty());
        assert_eq!(config.formats, vec!["iife"]);
        assert_eq!(config.watch_dirs, vec![PathBuf::from("lib")]);
        assert!(config.extensions.is_empty());
        assert!(config.live_reload.is_empty());
    }

    #[test]
    fn livereload_true_copies_outputs() {
        let config = BuildConfig::from_value(json!({
            "output": ["dist/a", "dist/b"],
            "livereload": true
        }))
        .unwrap();
        assert_eq!(config.live_reload, vec!["dist/a", "dist/b"]);
    }

    #[test]
    fn livereload_string_is_wrapped_then_extended() {
        let config = BuildConfig::from_value(json!({
            "output": "dist",
            "livereload": "public/index.html"
        }))
        .unwrap();
        assert_eq!(config.live_reload, vec!["public/index.html", "dist"]);
    }

    #[test]
    fn livereload_array_keeps_duplicates() {
        let config = BuildConfig::from_value(json!({
            "output": ["dist"],
            "livereload": ["dist", "public"]
        }))
        .unwrap();
        assert_eq!(config.live_reload, vec!["dist", "public", "dist"]);
    }

    #[test]
    fn true_for_list_field_is_rejected() {
        let err = BuildConfig::from_value(json!({ "formats": true })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "formats"));
    }

    #[test]
    fn invalid_ignore_pattern_is_rejected() {
        let err = BuildConfig::from_value(json!({ "ignore": ["("] })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn watch_resolves_files_to_parents_and_skips_missing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        let entry = dir.path().join("main.js");
        fs::write(&entry, "").unwrap();

        let config = BuildConfig::from_value(json!({
            "input": [src, entry],
            "watch": [dir.path().join("missing")]
        }))
        .unwrap();

        assert_eq!(config.watch(), &[src, dir.path().to_path_buf()]);
    }

    #[test]
    fn watch_is_memoized() {
        let dir = TempDir::new().unwrap();
        let late = dir.path().join("late");
        let config = BuildConfig::from_value(json!({ "input": [], "watch": [&late] })).unwrap();

        assert!(config.watch().is_empty());
        fs::create_dir(&late).unwrap();
        assert!(config.watch().is_empty());
    }
}
