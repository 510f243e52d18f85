//! Generate command implementation.
//!
//! Loads the configuration and prints the build jobs for the bundler engine.

use std::fs;

use entrygen_config::{BuildJob, ConfigStore, RawConfig, WATCH_ENV_VAR};
use tracing::info;

use crate::cli::GenerateArgs;
use crate::commands::ENV_PREFIX;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the generate command.
///
/// # Errors
///
/// Returns errors for malformed configuration, unsupported output formats,
/// unreadable input directories or an unwritable `--out` file.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let jobs = build_jobs(&args)?;

    if jobs.is_empty() {
        ui::warning("No entries found in the configured input directories");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&jobs)?
    } else {
        serde_json::to_string(&jobs)?
    };

    match &args.out {
        Some(path) => {
            fs::write(path, json).with_path(path)?;
            ui::success(&format!(
                "Wrote {} build jobs to {}",
                jobs.len(),
                path.display()
            ));
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Load the configuration named by `args` and generate its jobs.
pub fn build_jobs(args: &GenerateArgs) -> Result<Vec<BuildJob>> {
    let watching = args.watch || std::env::var_os(WATCH_ENV_VAR).is_some();
    let mut store = ConfigStore::new(RawConfig::for_mode(watching)).with_env_prefix(ENV_PREFIX);

    let config = store.load(&args.config)?;
    info!(
        "Generating {} build from {}",
        if config.is_production { "production" } else { "development" },
        args.config.display()
    );

    Ok(config.generate()?)
}
