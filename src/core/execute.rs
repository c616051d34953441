//! Sync executor.
//!
//! Applies planned operations against a target store. One failed write
//! never aborts the batch: every operation is attempted and every
//! operation gets exactly one outcome, index-aligned with the input.
//! Dry-run operations never reach the client at all.
//!
//! Writes may be dispatched concurrently up to a bounded fan-out; the
//! buffered stream keeps reported order equal to input order regardless
//! of completion order. On cancellation, writes already in flight run to
//! completion (so every attempted write has a recorded outcome) and
//! operations not yet dispatched report `Cancelled`.

use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::client::StoreClient;
use crate::core::plan::SyncOperation;
use crate::error::StoreError;

/// Default number of writes in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Terminal state of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// The write reached the store.
    Written,
    /// Dry run: the write would have happened.
    WouldWrite,
    /// The write was attempted and the store rejected it.
    Failed(StoreError),
    /// The batch was cancelled before this operation was dispatched.
    Cancelled,
}

/// The result of one operation, in the same position as its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub name: String,
    pub status: SyncStatus,
}

impl SyncOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, SyncStatus::Written | SyncStatus::WouldWrite)
    }

    /// The write error, present iff the operation failed.
    pub fn error(&self) -> Option<&StoreError> {
        match &self.status {
            SyncStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Knobs for one `execute` call.
#[derive(Debug, Clone)]
pub struct ExecuteOptions {
    /// Writes in flight at once. Must be at least 1.
    pub concurrency: usize,
    /// Cooperative cancellation for the batch.
    pub cancel: CancellationToken,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            cancel: CancellationToken::new(),
        }
    }
}

impl ExecuteOptions {
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            concurrency,
            ..Self::default()
        }
    }
}

/// Apply `operations` against `client`, one outcome per operation, in
/// input order.
///
/// The engine never retries: callers wanting retry resubmit the failed
/// names as a fresh plan. Writes are set-semantics, so re-running an
/// unchanged batch is idempotent.
pub async fn execute(
    operations: Vec<SyncOperation>,
    client: &dyn StoreClient,
    options: &ExecuteOptions,
) -> Vec<SyncOutcome> {
    assert!(options.concurrency >= 1, "concurrency must be at least 1");

    let total = operations.len();
    debug!(
        total,
        concurrency = options.concurrency,
        store = client.id(),
        "executing sync batch"
    );

    let outcomes: Vec<SyncOutcome> = futures::stream::iter(operations)
        .map(|op| {
            let cancel = options.cancel.clone();
            async move { run_one(op, client, &cancel).await }
        })
        .buffered(options.concurrency)
        .collect()
        .await;

    let failed = outcomes.iter().filter(|o| o.error().is_some()).count();
    if failed > 0 {
        warn!(failed, total, "sync batch finished with failures");
    } else {
        debug!(total, "sync batch finished");
    }

    outcomes
}

async fn run_one(
    op: SyncOperation,
    client: &dyn StoreClient,
    cancel: &CancellationToken,
) -> SyncOutcome {
    if op.dry_run {
        // Never touches the client.
        return SyncOutcome {
            name: op.name,
            status: SyncStatus::WouldWrite,
        };
    }

    // This future is first polled at dispatch time, so a cancelled token
    // here means the operation was never dispatched.
    if cancel.is_cancelled() {
        return SyncOutcome {
            name: op.name,
            status: SyncStatus::Cancelled,
        };
    }

    let status = match client.put(&op.name, &op.value).await {
        Ok(()) => SyncStatus::Written,
        Err(err) => {
            warn!(name = %op.name, error = %err, "write failed");
            SyncStatus::Failed(err)
        }
    };

    SyncOutcome {
        name: op.name,
        status,
    }
}
