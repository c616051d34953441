//! vaultdiff - diff and sync secrets between key-value secret stores.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── diff          # Categorized comparison report
//! │   ├── sync          # Copy a selection of secrets to the target
//! │   ├── list          # Names and metadata (never values)
//! │   ├── get / put     # Single-secret read and write
//! │   └── completions   # Shell completions
//! ├── client/           # StoreClient capability + backends
//! │   ├── mod           # StoreClient trait
//! │   ├── file          # JSON snapshot-file store
//! │   └── memory        # In-memory store with fault injection
//! ├── config            # .vaultdiff.toml store aliases
//! └── core/             # The engine: stateless and vendor-free
//!     ├── secret        # SecretRecord / SecretSet data model
//!     ├── snapshot      # SecretSet <-> JSON snapshot files
//!     ├── diff          # diff(source, target) -> DiffResult
//!     ├── plan          # selection -> ordered SyncOperations
//!     └── execute       # bounded-fan-out executor, per-item outcomes
//! ```
//!
//! # Guarantees
//!
//! - `diff` partitions every name across both stores into exactly one
//!   category; value mismatch beats metadata mismatch.
//! - `plan` output is sorted by name, so previews and batches are
//!   reproducible.
//! - `execute` returns one outcome per operation in input order; a failed
//!   write never aborts the batch, and dry-run never touches the store.
//! - The engine holds no state between calls and never depends on a
//!   concrete store vendor.

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod error;
