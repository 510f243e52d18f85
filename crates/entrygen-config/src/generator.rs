//! Build-job generation.
//!
//! Combines file discovery, output formats and plugin chains into the list of
//! jobs handed to the bundler engine.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::files::FileInfo;
use crate::output::OutputDescriptor;
use crate::plugins::Plugin;

/// Global `this` the bundler assumes for every job
pub const BUILD_CONTEXT: &str = "globalThis";

/// Paths never watched for changes
pub const WATCH_EXCLUDE: &str = "node_modules/**";

/// One bundler invocation: a single entry emitted in every requested format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildJob {
    pub context: &'static str,
    pub watch: WatchOptions,
    pub input: PathBuf,
    pub output: Vec<OutputDescriptor>,
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchOptions {
    pub exclude: String,
    pub include: Vec<String>,
}

impl BuildConfig {
    /// Output directory paired with the input at `index`, falling back to the
    /// first output directory.
    pub fn output_dir_for(&self, index: usize) -> Result<&Path> {
        self.output_dirs
            .get(index)
            .or_else(|| self.output_dirs.first())
            .map(PathBuf::as_path)
            .ok_or_else(|| {
                ConfigError::MissingOutputDir(self.input_dirs.get(index).cloned().unwrap_or_default())
            })
    }

    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions {
            exclude: WATCH_EXCLUDE.to_string(),
            include: self
                .watch()
                .iter()
                .map(|dir| dir.join("**").display().to_string())
                .collect(),
        }
    }

    pub fn build_job(&self, file: &FileInfo) -> Result<BuildJob> {
        let output = self
            .formats
            .iter()
            .map(|format| self.output_format(format, &file.output, &file.name))
            .collect::<Result<Vec<_>>>()?;

        Ok(BuildJob {
            context: BUILD_CONTEXT,
            watch: self.watch_options(),
            input: file.input.clone(),
            output,
            plugins: self.plugins(&file.name, &file.output),
        })
    }

    /// Jobs for every eligible file of every input, in input order and then
    /// discovery order.
    ///
    /// # Errors
    ///
    /// Fails on the first unsupported format, when inputs are configured
    /// without any output directory, or when an input cannot be listed.
    pub fn generate(&self) -> Result<Vec<BuildJob>> {
        if !self.output_dirs.is_empty() && self.output_dirs.len() < self.input_dirs.len() {
            warn!(
                "{} inputs but only {} outputs configured; extra inputs build into {}",
                self.input_dirs.len(),
                self.output_dirs.len(),
                self.output_dirs[0].display()
            );
        }

        let mut jobs = Vec::new();
        for (index, input_dir) in self.input_dirs.iter().enumerate() {
            let output_dir = self.output_dir_for(index)?;
            let files = self.file_list(input_dir, output_dir)?;
            debug!(
                "{} entries in {} -> {}",
                files.len(),
                input_dir.display(),
                output_dir.display()
            );

            for file in &files {
                jobs.push(self.build_job(file)?);
            }
        }

        Ok(jobs)
    }
}
