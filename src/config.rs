//! Configuration file management.
//!
//! Handles the optional `.vaultdiff.toml` in the working directory, which
//! maps store aliases to snapshot paths so commands can say `prod`
//! instead of `snapshots/prod.json`:
//!
//! ```toml
//! [stores]
//! prod = "snapshots/prod.json"
//! staging = "snapshots/staging.json"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".vaultdiff.toml";

/// Contents of `.vaultdiff.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store alias → snapshot path.
    #[serde(default)]
    pub stores: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Load from `dir`, or an empty config if the file does not exist.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Unreadable {
                    path: path.display().to_string(),
                    source,
                }
                .into());
            }
        };

        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), stores = config.stores.len(), "loaded config");
        Ok(config)
    }

    /// Load from the current working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Path for a known alias.
    pub fn store_path(&self, alias: &str) -> Option<&Path> {
        self.stores.get(alias).map(PathBuf::as_path)
    }
}
