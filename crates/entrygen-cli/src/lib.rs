//! entrygen CLI.
//!
//! Command-line front end for `entrygen-config`: prints the build jobs the
//! bundler engine consumes, and carries the small helpers a project built
//! this way needs (font installation, a static file server).
//!
//! - [`cli`] - Argument parsing
//! - [`commands`] - Command implementations
//! - [`error`] - Error types and diagnostics
//! - [`logger`] - Structured logging with tracing
//! - [`server`] - Static file server
//! - [`ui`] - Terminal status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
