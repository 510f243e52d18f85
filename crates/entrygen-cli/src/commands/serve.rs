//! Serve command implementation.

use crate::cli::ServeArgs;
use crate::error::{CliError, Result, ResultExt};
use crate::server;

/// Execute the serve command.
pub async fn execute(args: ServeArgs) -> Result<()> {
    if !args.root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "root is not a directory: {}",
            args.root.display()
        )));
    }

    server::serve(&args.root, args.port)
        .await
        .with_hint("Is another server using the port? Pick another one with --port")
}
