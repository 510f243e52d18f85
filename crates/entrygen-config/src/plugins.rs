//! Plugin chain descriptors.
//!
//! Plugins are described, not executed: each variant serializes to the name
//! and options the bundler engine should instantiate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::BuildConfig;

/// Delay before the live-reload server notifies clients (milliseconds)
pub const LIVE_RELOAD_DELAY_MS: u64 = 200;

/// Directory the resolver searches for bare module specifiers
pub const MODULE_DIRECTORY: &str = "node_modules";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
    /// Remove stale source maps before a production build
    Delete { targets: PathBuf },
    Json,
    Postcss(PostcssOptions),
    NodeResolve(ResolveOptions),
    Commonjs,
    PolyfillNode,
    Terser,
    Livereload(LiveReloadOptions),
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::Delete { .. } => "delete",
            Plugin::Json => "json",
            Plugin::Postcss(_) => "postcss",
            Plugin::NodeResolve(_) => "node-resolve",
            Plugin::Commonjs => "commonjs",
            Plugin::PolyfillNode => "polyfill-node",
            Plugin::Terser => "terser",
            Plugin::Livereload(_) => "livereload",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcssOptions {
    pub plugins: Vec<CssStep>,
    pub source_map: bool,
    /// Sibling file receiving the extracted CSS
    pub extract: String,
}

/// One stage of the CSS sub-pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum CssStep {
    Import,
    CombineMediaQuery,
    PresetEnv(PresetEnvOptions),
    Cssnano { preset: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetEnvOptions {
    pub autoprefixer: AutoprefixerOptions,
    pub features: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoprefixerOptions {
    pub cascade: bool,
}

impl Default for PresetEnvOptions {
    fn default() -> Self {
        Self {
            autoprefixer: AutoprefixerOptions { cascade: false },
            features: BTreeMap::from([("custom-properties".to_string(), true)]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    pub module_directories: Vec<String>,
    pub extensions: Vec<String>,
    pub browser: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveReloadOptions {
    pub delay: u64,
    pub watch: Vec<String>,
}

impl BuildConfig {
    /// Ordered plugin chain for the entry `name` compiled to `output`.
    ///
    /// Production wraps the common chain in a map cleanup and a minifier;
    /// development appends live reload when targets are configured.
    pub fn plugins(&self, name: &str, output: &Path) -> Vec<Plugin> {
        let mut plugins = vec![
            Plugin::Json,
            Plugin::Postcss(self.postcss_options(name)),
            Plugin::NodeResolve(ResolveOptions {
                module_directories: vec![MODULE_DIRECTORY.to_string()],
                extensions: self.extensions.clone(),
                browser: true,
            }),
            Plugin::Commonjs,
            Plugin::PolyfillNode,
        ];

        if self.is_production {
            let dir = output.parent().unwrap_or_else(|| Path::new(""));
            plugins.insert(
                0,
                Plugin::Delete {
                    targets: dir.join("*.map"),
                },
            );
            plugins.push(Plugin::Terser);
        } else if !self.live_reload.is_empty() {
            plugins.push(Plugin::Livereload(LiveReloadOptions {
                delay: LIVE_RELOAD_DELAY_MS,
                watch: self.live_reload.clone(),
            }));
        }

        plugins
    }

    fn postcss_options(&self, name: &str) -> PostcssOptions {
        let mut steps = vec![CssStep::Import];
        if !self.is_production {
            steps.push(CssStep::CombineMediaQuery);
        }
        steps.push(CssStep::PresetEnv(PresetEnvOptions::default()));
        if self.is_production {
            steps.push(CssStep::Cssnano {
                preset: "default".to_string(),
            });
        }

        PostcssOptions {
            plugins: steps,
            source_map: !self.is_production,
            extract: format!("{}.css", name),
        }
    }
}
