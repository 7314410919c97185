//! Store configuration resolution.
//!
//! The store root comes from the `ARTIFACT_STORE_ROOT` environment variable,
//! falling back to an `artifact-store.toml` file in the working directory,
//! then to the default `./artifact-store`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{StoreError, StoreResult};

/// Environment variable overriding the store root.
pub const STORE_ROOT_ENV: &str = "ARTIFACT_STORE_ROOT";
/// Configuration file consulted when the variable is unset.
pub const STORE_CONFIG_FILE: &str = "artifact-store.toml";

/// Artifact store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from("artifact-store")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// On-disk layout of the configuration file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    store: Option<StoreConfig>,
}

impl StoreConfig {
    /// Resolve configuration from the environment.
    pub fn from_env() -> StoreResult<Self> {
        if let Ok(root) = env::var(STORE_ROOT_ENV) {
            return Ok(Self {
                root: PathBuf::from(root),
            });
        }

        let path = Path::new(STORE_CONFIG_FILE);
        if path.exists() {
            return Self::from_file(path);
        }

        Ok(Self::default())
    }

    /// Load store configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::Configuration(format!("Failed to read config file: {e}"))
        })?;

        let config: ConfigFile = toml::from_str(&content).map_err(|e| {
            StoreError::Configuration(format!("Failed to parse config file: {e}"))
        })?;

        Ok(config.store.unwrap_or_default())
    }
}
