//! Raw configuration file schema.
//!
//! Mirrors the JSON object read from disk before normalization. List-like
//! fields accept a bare string, an array of strings, or `false`.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Configuration file consulted when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rollup.json";

/// Set by the bundler engine when it runs in watch mode.
pub const WATCH_ENV_VAR: &str = "ROLLUP_WATCH";

/// Accepted shapes for list-like fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shape {
    Flag(bool),
    One(String),
    Many(Vec<String>),
}

impl Shape {
    pub fn many<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Shape::Many(items.into_iter().map(Into::into).collect())
    }

    /// Normalize to a list: `false` becomes empty and a single item is wrapped.
    ///
    /// `true` carries no meaning for a list and is rejected.
    pub fn into_list(self, field: &str) -> Result<Vec<String>> {
        match self {
            Shape::Flag(false) => Ok(Vec::new()),
            Shape::Flag(true) => Err(ConfigError::invalid_value(
                field,
                "expected a string, an array of strings or false",
            )),
            Shape::One(item) => Ok(vec![item]),
            Shape::Many(items) => Ok(items),
        }
    }
}

/// On-disk configuration object, merged key by key over the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Production build (minified, no source maps)
    pub prod: bool,

    /// Eligible source extensions
    pub ext: Shape,

    /// Suffix appended to output file names
    pub out: String,

    /// Regular expressions matched against lowercased file names
    pub ignore: Vec<String>,

    /// Requested module formats (es, iife, umd)
    pub formats: Shape,

    /// Source directories or single files
    pub input: Shape,

    /// Destination directories, paired by index with `input`
    pub output: Shape,

    /// Extra paths to watch
    pub watch: Shape,

    /// Live-reload targets; `true` means "the output directories"
    pub livereload: Shape,
}

impl RawConfig {
    /// Defaults for the given build mode. Watch mode produces a development build.
    pub fn for_mode(watching: bool) -> Self {
        Self {
            prod: !watching,
            ext: Shape::many([".js", ".mjs", ".cjs"]),
            out: ".js".to_string(),
            ignore: vec!["^_".to_string(), "^\\.".to_string()],
            formats: Shape::many(["es"]),
            input: Shape::many(["assets"]),
            output: Shape::many(["public/build"]),
            watch: Shape::Many(Vec::new()),
            livereload: Shape::Flag(true),
        }
    }

    /// Defaults with the build mode taken from [`WATCH_ENV_VAR`].
    pub fn from_env() -> Self {
        Self::for_mode(std::env::var_os(WATCH_ENV_VAR).is_some())
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self::for_mode(false)
    }
}
