//! Error types.
//!
//! Store-interaction failures during a sync batch are never surfaced through
//! these types: the executor records them per-operation as [`SyncOutcome`]
//! data so one bad write cannot abort the rest of the batch. Everything that
//! happens before a batch starts (loading snapshots, resolving stores,
//! parsing config) propagates normally.
//!
//! [`SyncOutcome`]: crate::core::execute::SyncOutcome

use thiserror::Error;

/// Top-level error for CLI and library entry points.
#[derive(Error, Debug)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// A sync batch completed with recorded per-operation failures. The
    /// outcomes were already reported; this only carries the exit status.
    #[error("{failed} of {total} writes failed")]
    SyncIncomplete { failed: usize, total: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures talking to a concrete secret store backend.
///
/// This is the full error surface a [`StoreClient`] implementation may
/// report: `list` fails with `Connection | Auth | NotFound`, `get` with
/// `NotFound | Auth`, and `put` with `Auth | Quota | Connection`.
///
/// [`StoreClient`]: crate::client::StoreClient
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("secret not found: {name}")]
    NotFound { name: String },

    #[error("authentication failed: {message}")]
    Auth { message: String },

    #[error("store unreachable: {message}")]
    Connection { message: String },

    #[error("store quota exceeded: {message}")]
    Quota { message: String },
}

impl StoreError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn quota(message: impl Into<String>) -> Self {
        Self::Quota {
            message: message.into(),
        }
    }
}

/// Problems with the optional `.vaultdiff.toml` store-alias file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown store: {name} (not an alias in .vaultdiff.toml and no such file)")]
    UnknownStore { name: String },

    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Invalid {
        path: String,
        source: toml::de::Error,
    },
}

/// Problems loading or writing a snapshot file.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot not found: {path}")]
    NotFound { path: String },

    #[error("failed to read snapshot {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed snapshot {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to write snapshot {path}: {source}")]
    Unwritable {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to encode snapshot {path}: {source}")]
    Unencodable {
        path: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
