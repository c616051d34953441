//! Core engine components.
//!
//! The stateless diff-plan-execute pipeline plus its data model. Nothing
//! in here knows about a concrete store backend; the executor talks to
//! the [`StoreClient`](crate::client::StoreClient) capability only.

pub mod diff;
pub mod execute;
pub mod plan;
pub mod secret;
pub mod snapshot;

pub use diff::{diff, DiffCategory, DiffResult};
pub use execute::{execute, ExecuteOptions, SyncOutcome, SyncStatus};
pub use plan::{plan, PlanWarning, Selection, SyncOperation, SyncPlan};
pub use secret::{SecretMetadata, SecretRecord, SecretSet};
