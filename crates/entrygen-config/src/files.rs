//! Source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::BuildConfig;
use crate::error::Result;

/// A discovered entry point and the file it compiles to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// File stem, used to name sibling outputs
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl BuildConfig {
    /// Case-insensitive suffix match against the configured extensions.
    pub fn is_source_file(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(&ext.to_lowercase()))
    }

    pub fn is_ignored(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();
        self.ignore.iter().any(|re| re.is_match(&file_name))
    }

    pub fn file_info(&self, file_name: &str, input: PathBuf, output_dir: &Path) -> FileInfo {
        let name = Path::new(file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output = output_dir.join(format!("{}{}", name, self.output_suffix));
        FileInfo {
            name,
            input,
            output,
        }
    }

    /// Entry points found at `input_dir`.
    ///
    /// A missing path yields no files. A single file is kept if its extension
    /// is eligible. A directory contributes its immediate children that are
    /// neither ignored nor of the wrong extension, sorted by name.
    pub fn file_list(&self, input_dir: &Path, output_dir: &Path) -> Result<Vec<FileInfo>> {
        if !input_dir.exists() {
            debug!("Input {} does not exist, skipping", input_dir.display());
            return Ok(Vec::new());
        }

        if !fs::metadata(input_dir)?.is_dir() {
            let Some(file_name) = input_dir.file_name().and_then(|name| name.to_str()) else {
                return Ok(Vec::new());
            };
            if !self.is_source_file(file_name) {
                return Ok(Vec::new());
            }
            return Ok(vec![self.file_info(
                file_name,
                input_dir.to_path_buf(),
                output_dir,
            )]);
        }

        let mut names = fs::read_dir(input_dir)?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<std::io::Result<Vec<_>>>()?;
        names.sort();

        let files = names
            .iter()
            .filter_map(|name| name.to_str())
            .filter(|name| !self.is_ignored(name) && self.is_source_file(name))
            .map(|name| {
                debug!("Found entry {}", input_dir.join(name).display());
                self.file_info(name, input_dir.join(name), output_dir)
            })
            .collect();

        Ok(files)
    }
}
