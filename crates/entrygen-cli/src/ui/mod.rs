//! Terminal status messages.
//!
//! # Examples
//!
//! ```no_run
//! use entrygen_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Loading rollup.json");
//! ui::success("Generated 3 build jobs");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

mod messages;

pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether status messages are colored.
///
/// `--no-color` always wins; otherwise `NO_COLOR`/`FORCE_COLOR` and the
/// terminal capabilities decide.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Check if color output should be enabled.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}
