//! Snapshot files.
//!
//! A snapshot is the on-disk serialization of a [`SecretSet`]: a JSON
//! object mapping each secret name to its value and metadata. It carries
//! no engine state, so any snapshot can be fed back in as a source or
//! target for offline inspection.
//!
//! ```json
//! {
//!   "DATABASE_URL": {
//!     "value": "postgres://db",
//!     "metadata": { "created": "2026-01-10T12:00:00Z", "tags": { "env": "prod" } }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::secret::{SecretMetadata, SecretRecord, SecretSet};
use crate::error::SnapshotError;

#[derive(Serialize, Deserialize)]
struct Entry {
    value: String,
    #[serde(default)]
    metadata: SecretMetadata,
}

/// Load a snapshot file into a fresh [`SecretSet`].
pub fn load(path: &Path) -> Result<SecretSet, SnapshotError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SnapshotError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            SnapshotError::Unreadable {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let entries: BTreeMap<String, Entry> =
        serde_json::from_str(&raw).map_err(|source| SnapshotError::Malformed {
            path: path.display().to_string(),
            source,
        })?;

    let set: SecretSet = entries
        .into_iter()
        .map(|(name, entry)| SecretRecord::new(name, entry.value).with_metadata(entry.metadata))
        .collect();

    debug!(path = %path.display(), secrets = set.len(), "loaded snapshot");
    Ok(set)
}

/// Write a [`SecretSet`] to a snapshot file, sorted by name.
pub fn save(path: &Path, set: &SecretSet) -> Result<(), SnapshotError> {
    let entries: BTreeMap<&str, Entry> = set
        .iter()
        .map(|record| {
            (
                record.name(),
                Entry {
                    value: record.value().to_string(),
                    metadata: record.metadata().clone(),
                },
            )
        })
        .collect();

    // Keyed by name and pretty-printed so snapshots diff cleanly in git.
    let raw =
        serde_json::to_string_pretty(&entries).map_err(|source| SnapshotError::Unencodable {
            path: path.display().to_string(),
            source,
        })?;

    std::fs::write(path, raw).map_err(|source| SnapshotError::Unwritable {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), secrets = set.len(), "wrote snapshot");
    Ok(())
}
