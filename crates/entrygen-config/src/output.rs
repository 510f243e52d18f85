//! Per-format output descriptors.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};

/// Module format of an emitted bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// ES module, written to the entry's primary output
    Es,
    /// Immediately-invoked function expression for `<script>` tags
    Iife,
    /// Universal module definition
    Umd,
}

impl ModuleFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleFormat::Es => "es",
            ModuleFormat::Iife => "iife",
            ModuleFormat::Umd => "umd",
        }
    }
}

impl FromStr for ModuleFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "es" => Ok(ModuleFormat::Es),
            "iife" => Ok(ModuleFormat::Iife),
            "umd" => Ok(ModuleFormat::Umd),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Export style for wrapped formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Named,
    Auto,
}

impl ExportMode {
    pub fn for_format(format: ModuleFormat) -> Self {
        match format {
            ModuleFormat::Umd => ExportMode::Named,
            _ => ExportMode::Auto,
        }
    }
}

/// Output options for one format of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    pub file: PathBuf,

    /// Global name for iife/umd bundles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports: Option<ExportMode>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline_dynamic_imports: bool,

    pub format: ModuleFormat,

    pub sourcemap: bool,
}

impl BuildConfig {
    /// Describe how the entry `name`, whose primary output is `output`, is
    /// emitted in `format`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for anything but es, iife and umd.
    pub fn output_format(&self, format: &str, output: &Path, name: &str) -> Result<OutputDescriptor> {
        let format: ModuleFormat = format.parse()?;
        let sourcemap = !self.is_production;

        let descriptor = match format {
            ModuleFormat::Es => OutputDescriptor {
                file: output.to_path_buf(),
                name: None,
                exports: None,
                inline_dynamic_imports: true,
                format,
                sourcemap,
            },
            ModuleFormat::Iife | ModuleFormat::Umd => {
                let dir = output.parent().unwrap_or_else(|| Path::new(""));
                OutputDescriptor {
                    file: dir.join(format!("{}.{}{}", name, format, self.output_suffix)),
                    name: Some(name.to_string()),
                    exports: (format == ModuleFormat::Umd).then(|| ExportMode::for_format(format)),
                    inline_dynamic_imports: false,
                    format,
                    sourcemap,
                }
            }
        };

        Ok(descriptor)
    }
}
