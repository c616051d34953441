//! Snapshot-file store.
//!
//! A [`StoreClient`] over a local JSON snapshot file. This is what the
//! CLI drives: exported snapshots of real vaults can be diffed and
//! synced offline, and the synced result is itself a snapshot.
//!
//! `put` rewrites the whole file under an internal lock, so concurrent
//! writes from the executor's fan-out remain safe.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::client::StoreClient;
use crate::core::secret::{SecretMetadata, SecretRecord, SecretSet};
use crate::core::snapshot;
use crate::error::{SnapshotError, StoreError};

/// A store backed by one snapshot file.
pub struct FileStore {
    id: String,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store over `path`. The file may not exist yet: `get` and
    /// `put` treat a missing file as an empty store and `put` creates it,
    /// while `list` reports a missing file as an error (the caller asked
    /// to compare against a store that is not there).
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_set(&self) -> Result<SecretSet, StoreError> {
        match snapshot::load(&self.path) {
            Ok(set) => Ok(set),
            Err(SnapshotError::NotFound { .. }) => Ok(SecretSet::new()),
            Err(err) => Err(StoreError::connection(err.to_string())),
        }
    }
}

#[async_trait]
impl StoreClient for FileStore {
    fn id(&self) -> &str {
        &self.id
    }

    async fn list(&self) -> Result<SecretSet, StoreError> {
        // Unlike `put`, a fetch of a store that is not there is an error,
        // not an empty set: the caller asked to compare against it.
        snapshot::load(&self.path).map_err(|err| StoreError::connection(err.to_string()))
    }

    async fn get(&self, name: &str) -> Result<String, StoreError> {
        let set = self.read_set()?;
        set.get(name)
            .map(|record| record.value().to_string())
            .ok_or_else(|| StoreError::not_found(name))
    }

    async fn put(&self, name: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut set = self.read_set()?;
        let metadata = match set.get(name) {
            Some(existing) => SecretMetadata {
                updated: Some(chrono::Utc::now()),
                ..existing.metadata().clone()
            },
            None => SecretMetadata::stamped_now(),
        };
        set.insert(SecretRecord::new(name, value).with_metadata(metadata));

        snapshot::save(&self.path, &set).map_err(|err| StoreError::connection(err.to_string()))
    }
}
