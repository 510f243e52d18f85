//! Multi-entry bundler configuration.
//!
//! Loads a JSON configuration, discovers entry files in the configured input
//! directories and describes one build job per entry: its outputs per module
//! format, its plugin chain and its watch globs. Nothing is bundled here; the
//! jobs are handed to an external bundler engine.

pub mod config;
pub mod error;
pub mod files;
pub mod generator;
pub mod markup;
pub mod output;
pub mod plugins;
pub mod schema;
pub mod store;

// Re-export main types
pub use config::BuildConfig;
pub use error::{ConfigError, Result};
pub use files::FileInfo;
pub use generator::{BuildJob, WatchOptions, BUILD_CONTEXT, WATCH_EXCLUDE};
pub use markup::{classify, classify_tag, TagKind};
pub use output::{ExportMode, ModuleFormat, OutputDescriptor};
pub use plugins::{CssStep, Plugin};
pub use schema::{RawConfig, Shape, DEFAULT_CONFIG_FILE, WATCH_ENV_VAR};
pub use store::ConfigStore;
