//! Fonts command implementation.
//!
//! Copies the web fonts of installed `@fontsource` packages next to the
//! generated bundles so stylesheets can reference them.

use std::fs;
use std::path::{Path, PathBuf};

use entrygen_config::{ConfigStore, RawConfig};
use globset::GlobBuilder;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cli::FontsArgs;
use crate::commands::ENV_PREFIX;
use crate::error::{CliError, Result};
use crate::ui;

/// Scope holding the font packages inside `node_modules`
pub const FONT_SCOPE: &str = "@fontsource";

/// Font files relative to [`FONT_SCOPE`]
const FONT_GLOB: &str = "*/files/*.woff*";

/// Subdirectory of the output directory receiving the fonts
const FONT_DIR: &str = "files";

/// Outcome of a font copy.
#[derive(Debug, Default)]
pub struct FontReport {
    pub installed: Vec<PathBuf>,
    /// Destinations that already existed and were left alone
    pub skipped: Vec<PathBuf>,
}

/// Execute the fonts command.
pub fn execute(args: FontsArgs) -> Result<()> {
    let mut store = ConfigStore::new(RawConfig::default()).with_env_prefix(ENV_PREFIX);
    let config = store.load(&args.config)?;
    let output_dir = config.output_dirs.first().ok_or_else(|| {
        CliError::InvalidArgument("no output directory configured in 'output'".to_string())
    })?;

    let report = copy_fonts(&args.node_modules, output_dir)?;
    ui::success(&format!(
        "Installed {} fonts ({} already present)",
        report.installed.len(),
        report.skipped.len()
    ));
    Ok(())
}

/// Copy `<node_modules>/@fontsource/*/files/*.woff*` into `<output_dir>/files`.
///
/// The destination is created if missing. Existing files are never overwritten.
pub fn copy_fonts(node_modules: &Path, output_dir: &Path) -> Result<FontReport> {
    let dest = output_dir.join(FONT_DIR);
    fs::create_dir_all(&dest)?;
    debug!("Installing fonts into {}", dest.display());

    let mut report = FontReport::default();
    for source in find_fonts(&node_modules.join(FONT_SCOPE))? {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let target = dest.join(file_name);
        if target.exists() {
            report.skipped.push(target);
            continue;
        }

        info!(
            "Installing font {}",
            Path::new(file_name).file_stem().unwrap_or(file_name).to_string_lossy()
        );
        fs::copy(&source, &target)?;
        report.installed.push(target);
    }

    Ok(report)
}

fn find_fonts(scope: &Path) -> Result<Vec<PathBuf>> {
    if !scope.is_dir() {
        debug!("No font packages at {}", scope.display());
        return Ok(Vec::new());
    }

    let matcher = GlobBuilder::new(FONT_GLOB)
        .literal_separator(true)
        .build()?
        .compile_matcher();

    let mut fonts = Vec::new();
    for entry in WalkDir::new(scope)
        .min_depth(3)
        .max_depth(3)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(scope).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            fonts.push(entry.into_path());
        }
    }

    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn install_package(node_modules: &Path, package: &str, files: &[&str]) {
        let dir = node_modules.join(FONT_SCOPE).join(package).join("files");
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), file.as_bytes()).unwrap();
        }
    }

    #[test]
    fn test_copies_woff_files_only() {
        let temp = TempDir::new().unwrap();
        let node_modules = temp.path().join("node_modules");
        install_package(
            &node_modules,
            "roboto",
            &["roboto-latin-400.woff2", "roboto-latin-400.woff", "LICENSE"],
        );
        install_package(&node_modules, "inter", &["inter-latin-700.woff2"]);
        let output = temp.path().join("public/build");

        let report = copy_fonts(&node_modules, &output).unwrap();

        let mut installed: Vec<_> = report
            .installed
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        installed.sort();
        assert_eq!(
            installed,
            vec!["inter-latin-700.woff2", "roboto-latin-400.woff", "roboto-latin-400.woff2"]
        );
        assert!(output.join("files/roboto-latin-400.woff2").exists());
        assert!(!output.join("files/LICENSE").exists());
    }

    #[test]
    fn test_existing_fonts_are_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let node_modules = temp.path().join("node_modules");
        install_package(&node_modules, "roboto", &["roboto.woff2"]);
        let output = temp.path().join("out");
        fs::create_dir_all(output.join("files")).unwrap();
        fs::write(output.join("files/roboto.woff2"), "custom").unwrap();

        let report = copy_fonts(&node_modules, &output).unwrap();

        assert!(report.installed.is_empty());
        assert_eq!(report.skipped, vec![output.join("files/roboto.woff2")]);
        assert_eq!(fs::read_to_string(output.join("files/roboto.woff2")).unwrap(), "custom");
    }

    #[test]
    fn test_missing_packages_still_create_destination() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");

        let report = copy_fonts(&temp.path().join("node_modules"), &output).unwrap();

        assert!(report.installed.is_empty());
        assert!(output.join("files").is_dir());
    }

    #[test]
    fn test_nested_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        let node_modules = temp.path().join("node_modules");
        let nested = node_modules.join(FONT_SCOPE).join("roboto/files/extra");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.woff2"), "").unwrap();

        let report = copy_fonts(&node_modules, &temp.path().join("out")).unwrap();
        assert!(report.installed.is_empty());
    }
}
