//! Command implementations for the entrygen CLI.
//!
//! - [`generate`] - Build jobs for the bundler engine
//! - [`serve`] - Static file server
//! - [`fonts`] - Font asset copy
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod fonts;
pub mod generate;
pub mod serve;

// Re-export execute functions for convenience
pub use fonts::execute as fonts_execute;
pub use generate::execute as generate_execute;
pub use serve::execute as serve_execute;

/// Prefix of environment variables layered over the configuration file
pub const ENV_PREFIX: &str = "ENTRYGEN_";
