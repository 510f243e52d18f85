//! Logging setup for the entrygen CLI.
//!
//! Built on `tracing`. `--verbose` shows debug output from the entrygen
//! crates, `--quiet` only errors; otherwise `RUST_LOG` is honored with an
//! info-level fallback.
//!
//! # Example
//!
//! ```rust,no_run
//! use entrygen_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Generating build jobs");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "entrygen_config=debug,entrygen_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "entrygen_config=info,entrygen_cli=info";

/// Filter for the given verbosity flags. `verbose` wins over `quiet`.
pub fn env_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so that generated JSON on stdout stays machine-readable.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}
