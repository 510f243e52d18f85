//! entrygen - multi-entry bundler configuration generator.
//!
//! Parses arguments, initializes logging and dispatches to the command.

use clap::Parser;
use entrygen_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Serve(serve_args) => commands::serve_execute(serve_args).await,
        cli::Command::Fonts(fonts_args) => commands::fonts_execute(fonts_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
