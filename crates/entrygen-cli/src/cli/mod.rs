//! Command-line interface definition for entrygen.
//!
//! # Command Structure
//!
//! - `entrygen generate` - Print the bundler build jobs as JSON
//! - `entrygen serve` - Serve a directory of static files
//! - `entrygen fonts` - Copy installed font files into the output directory

mod commands;

use clap::Parser;

pub use commands::{Command, FontsArgs, GenerateArgs, ServeArgs};

/// entrygen - multi-entry bundler configuration generator
#[derive(Parser, Debug)]
#[command(
    name = "entrygen",
    version,
    about = "Generate multi-entry bundler build jobs",
    long_about = "entrygen scans the configured input directories for entry files and\n\
                  describes one build job per entry: output files per module format,\n\
                  the plugin chain and the watch globs, ready for the bundler engine."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
