//! Store client capability.
//!
//! [`StoreClient`] is the only thing the engine consumes from its
//! environment. Concrete backends (a cloud vault SDK, the snapshot-file
//! store, the in-memory test store) implement it; the engine never
//! depends on any specific vendor.

use async_trait::async_trait;

use crate::core::secret::SecretSet;
use crate::error::StoreError;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Capability interface over one concrete secret store.
///
/// Implementations must tolerate concurrent independent calls: the
/// executor may have several `put`s in flight at once.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Identifier used in reports and logs (never in writes).
    fn id(&self) -> &str;

    /// Fetch the store's full snapshot.
    async fn list(&self) -> Result<SecretSet, StoreError>;

    /// Fetch one secret's value. Absence is signaled by
    /// [`StoreError::NotFound`], never by an empty value.
    async fn get(&self, name: &str) -> Result<String, StoreError>;

    /// Create or overwrite one secret (set semantics, idempotent).
    async fn put(&self, name: &str, value: &str) -> Result<(), StoreError>;
}
