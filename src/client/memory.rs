//! In-memory store.
//!
//! Backs tests and local experiments. Supports per-name fault injection
//! and artificial write latency so the executor's partial-failure and
//! ordering guarantees can be exercised, and counts `put` invocations so
//! dry-run tests can prove the client was never touched.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::client::StoreClient;
use crate::core::secret::{SecretMetadata, SecretRecord, SecretSet};
use crate::error::StoreError;

#[derive(Default)]
struct Inner {
    records: HashMap<String, SecretRecord>,
    fail_puts: HashMap<String, StoreError>,
    put_delays: HashMap<String, Duration>,
    fail_list: Option<StoreError>,
    put_calls: usize,
}

/// A store held entirely in memory.
pub struct MemoryStore {
    id: String,
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Seed the store with name/value pairs.
    pub async fn seed(&self, pairs: &[(&str, &str)]) {
        let mut inner = self.inner.lock().await;
        for (name, value) in pairs {
            inner
                .records
                .insert((*name).to_string(), SecretRecord::new(*name, *value));
        }
    }

    /// Make every `put` of `name` fail with `error`.
    pub async fn fail_put(&self, name: &str, error: StoreError) {
        self.inner
            .lock()
            .await
            .fail_puts
            .insert(name.to_string(), error);
    }

    /// Delay every `put` of `name` by `duration`.
    pub async fn delay_put(&self, name: &str, duration: Duration) {
        self.inner
            .lock()
            .await
            .put_delays
            .insert(name.to_string(), duration);
    }

    /// Make the next `list` fail with `error`.
    pub async fn fail_list(&self, error: StoreError) {
        self.inner.lock().await.fail_list = Some(error);
    }

    /// Number of `put` calls that reached the store so far.
    pub async fn put_calls(&self) -> usize {
        self.inner.lock().await.put_calls
    }

    /// Current value of `name`, if present.
    pub async fn value_of(&self, name: &str) -> Option<String> {
        self.inner
            .lock()
            .await
            .records
            .get(name)
            .map(|r| r.value().to_string())
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    fn id(&self) -> &str {
        &self.id
    }

    async fn list(&self) -> Result<SecretSet, StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(error) = inner.fail_list.take() {
            return Err(error);
        }
        Ok(inner.records.values().cloned().collect())
    }

    async fn get(&self, name: &str) -> Result<String, StoreError> {
        self.inner
            .lock()
            .await
            .records
            .get(name)
            .map(|r| r.value().to_string())
            .ok_or_else(|| StoreError::not_found(name))
    }

    async fn put(&self, name: &str, value: &str) -> Result<(), StoreError> {
        let delay = {
            let mut inner = self.inner.lock().await;
            inner.put_calls += 1;
            inner.put_delays.get(name).copied()
        };
        // Sleep outside the lock so slow writes do not serialize the rest.
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut inner = self.inner.lock().await;
        if let Some(error) = inner.fail_puts.get(name) {
            return Err(error.clone());
        }
        let metadata = match inner.records.get(name) {
            Some(existing) => SecretMetadata {
                updated: Some(chrono::Utc::now()),
                ..existing.metadata().clone()
            },
            None => SecretMetadata::stamped_now(),
        };
        inner.records.insert(
            name.to_string(),
            SecretRecord::new(name, value).with_metadata(metadata),
        );
        Ok(())
    }
}
