//! Sync planner.
//!
//! Turns a selection (everything, an explicit name list, or diff
//! categories) into an ordered list of [`SyncOperation`]s ready for the
//! executor. Names requested but absent from the source are dropped from
//! the plan and reported as warnings, never turned into half-specified
//! operations.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::diff::{DiffCategory, DiffResult};
use crate::core::secret::SecretSet;

/// Which source names a sync should cover.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Every name in the source set.
    All,
    /// An explicit list of names. Duplicates collapse; unknown names warn.
    Names(Vec<String>),
    /// Names drawn from chosen buckets of a previously computed diff.
    FromDiff {
        diff: DiffResult,
        categories: BTreeSet<DiffCategory>,
    },
}

/// One planned write: copy `value` to `name` in the target store.
///
/// Consumed exactly once by the executor and discarded after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOperation {
    pub name: String,
    pub value: String,
    pub target: String,
    pub dry_run: bool,
}

/// A non-fatal problem noticed while planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanWarning {
    /// A requested name does not exist in the source set.
    NotInSource(String),
}

impl std::fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInSource(name) => {
                write!(f, "{} not found in source, skipped", name)
            }
        }
    }
}

/// Planner output: operations sorted by name, plus warnings.
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    pub operations: Vec<SyncOperation>,
    pub warnings: Vec<PlanWarning>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}

/// Build a sync plan from `source` for the given selection.
///
/// Output order is lexicographic by name regardless of input iteration
/// order, so dry-run previews and executed batches are reproducible and
/// diffable across runs.
pub fn plan(source: &SecretSet, selection: &Selection, target: &str, dry_run: bool) -> SyncPlan {
    // BTreeSet gives both dedup and the stable ordering in one pass.
    let mut wanted: BTreeSet<String> = BTreeSet::new();
    let mut warnings = Vec::new();

    match selection {
        Selection::All => {
            wanted.extend(source.names().into_iter().map(str::to_string));
        }
        Selection::Names(names) => {
            for name in names {
                if source.contains(name) {
                    wanted.insert(name.clone());
                } else {
                    warnings.push(PlanWarning::NotInSource(name.clone()));
                }
            }
        }
        Selection::FromDiff { diff, categories } => {
            for category in categories {
                for name in diff.names(*category) {
                    if source.contains(name) {
                        wanted.insert(name.clone());
                    } else {
                        // Target-only names have no source value to copy.
                        warnings.push(PlanWarning::NotInSource(name.clone()));
                    }
                }
            }
        }
    }

    let operations: Vec<SyncOperation> = wanted
        .into_iter()
        .map(|name| {
            let record = source.get(&name).expect("planned name must be in source");
            SyncOperation {
                name,
                value: record.value().to_string(),
                target: target.to_string(),
                dry_run,
            }
        })
        .collect();

    debug!(
        operations = operations.len(),
        warnings = warnings.len(),
        target,
        dry_run,
        "built sync plan"
    );

    SyncPlan {
        operations,
        warnings,
    }
}
