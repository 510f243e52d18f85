//! Per-file configuration cache.
//!
//! Each configuration file is read, merged over the defaults and normalized
//! once; later loads of the same key return the cached instance even if the
//! file has changed on disk since.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::schema::{RawConfig, DEFAULT_CONFIG_FILE};

/// Loads and caches [`BuildConfig`]s keyed by configuration file path.
///
/// Construct one at startup and pass it to whatever needs a configuration.
///
/// # Example
///
/// ```no_run
/// use entrygen_config::ConfigStore;
///
/// let mut store = ConfigStore::from_env();
/// let config = store.load("rollup.json").unwrap();
/// let jobs = config.generate().unwrap();
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    defaults: RawConfig,
    env_prefix: Option<String>,
    cache: HashMap<PathBuf, Arc<BuildConfig>>,
}

impl ConfigStore {
    pub fn new(defaults: RawConfig) -> Self {
        Self {
            defaults,
            env_prefix: None,
            cache: HashMap::new(),
        }
    }

    /// Store whose defaults take the build mode from the environment.
    pub fn from_env() -> Self {
        Self::new(RawConfig::from_env())
    }

    /// Layer environment variables with this prefix over the file
    /// (e.g. `ENTRYGEN_PROD=false`).
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Load the configuration stored at `key`, reading it on first use only.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file exists but is not a JSON object,
    /// and `ConfigError::InvalidValue`/`InvalidPattern` if a field has an
    /// unsupported shape.
    pub fn load(&mut self, key: impl AsRef<Path>) -> Result<Arc<BuildConfig>> {
        let key = key.as_ref();
        if let Some(config) = self.cache.get(key) {
            debug!("Using cached config for {}", key.display());
            return Ok(Arc::clone(config));
        }

        let config = Arc::new(self.read(key)?);
        self.cache.insert(key.to_path_buf(), Arc::clone(&config));
        Ok(config)
    }

    /// Load [`DEFAULT_CONFIG_FILE`] from the current directory.
    pub fn load_default(&mut self) -> Result<Arc<BuildConfig>> {
        self.load(DEFAULT_CONFIG_FILE)
    }

    pub fn is_cached(&self, key: impl AsRef<Path>) -> bool {
        self.cache.contains_key(key.as_ref())
    }

    fn read(&self, path: &Path) -> Result<BuildConfig> {
        let mut figment = Figment::from(Serialized::defaults(&self.defaults));

        if path.exists() {
            figment = figment.merge(Serialized::defaults(read_overrides(path)?));
            info!("Loaded config from {}", path.display());
        } else {
            debug!("No config file at {}, using defaults", path.display());
        }

        if let Some(prefix) = &self.env_prefix {
            figment = figment.merge(Env::prefixed(prefix));
        }

        let raw: RawConfig = figment.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "config".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::invalid_value(field, e.to_string())
        })?;

        BuildConfig::try_from(raw)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::from_env()
    }
}

fn read_overrides(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: format!("Invalid JSON: {}", e),
    })?;

    if !value.is_object() {
        return Err(ConfigError::Parse {
            path: path.to_path_buf(),
            message: "expected a JSON object at the top level".to_string(),
        });
    }

    Ok(value)
}
