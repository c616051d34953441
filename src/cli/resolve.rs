//! Store resolution helpers for CLI commands.
//!
//! A store argument is either an alias from `.vaultdiff.toml` or a
//! snapshot path. Aliases win; anything that looks like a path (has a
//! separator or a `.json` extension) or names an existing file is taken
//! as a path; everything else is an unknown store.

use std::path::{Path, PathBuf};

use crate::client::FileStore;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Resolve a store argument to a display id and a snapshot path.
pub fn resolve_store(arg: &str) -> Result<(String, PathBuf)> {
    let config = Config::load()?;

    if let Some(path) = config.store_path(arg) {
        return Ok((arg.to_string(), path.to_path_buf()));
    }

    let path = Path::new(arg);
    let looks_like_path = path.components().count() > 1
        || path.extension().is_some_and(|ext| ext == "json")
        || path.exists();
    if looks_like_path {
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(arg)
            .to_string();
        return Ok((id, path.to_path_buf()));
    }

    Err(ConfigError::UnknownStore {
        name: arg.to_string(),
    }
    .into())
}

/// Resolve a store argument straight to an opened [`FileStore`].
pub fn open_store(arg: &str) -> Result<FileStore> {
    let (id, path) = resolve_store(arg)?;
    Ok(FileStore::new(id, path))
}
