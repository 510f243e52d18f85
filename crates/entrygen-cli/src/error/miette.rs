//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, with a help line where one applies
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::Parse { path, message } => miette::miette!(
            help = "Check the JSON syntax of the configuration file",
            "Failed to parse {}: {}",
            path.display(),
            message
        ),
        ConfigError::UnsupportedFormat(format) => miette::miette!(
            help = "Supported formats are es, iife and umd",
            "Unsupported output format '{}'",
            format
        ),
        ConfigError::MissingOutputDir(input) => miette::miette!(
            help = "Add at least one entry to 'output'",
            "No output directory for input {}",
            input.display()
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_report() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::UnsupportedFormat(
            "amd".to_string(),
        )));
        assert!(report.to_string().contains("Unsupported output format 'amd'"));
    }

    #[test]
    fn test_other_errors_keep_message() {
        let report = cli_error_to_miette(CliError::Server("bind failed".to_string()));
        assert_eq!(report.to_string(), "Server error: bind failed");
    }
}
