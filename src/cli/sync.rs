//! Sync command - copy secrets from a source store to a target store.
//!
//! With no selection flags, syncs what a fresh diff says is out of sync
//! (source-only plus value-differs). Ctrl-C cancels the batch: in-flight
//! writes finish and are reported, undispatched ones report `cancelled`.

use std::collections::BTreeSet;

use tracing::info;

use crate::cli::{output, resolve};
use crate::client::StoreClient;
use crate::core::diff::{self, DiffCategory};
use crate::core::execute::{self, ExecuteOptions, SyncStatus};
use crate::core::plan::{self, Selection};
use crate::error::{Error, Result};

pub fn execute(
    source: &str,
    target: &str,
    dry_run: bool,
    names: Vec<String>,
    categories: Vec<DiffCategory>,
    all: bool,
    concurrency: usize,
) -> Result<()> {
    info!(source, target, dry_run, concurrency, "running sync");

    let source_store = resolve::open_store(source)?;
    let target_store = resolve::open_store(target)?;

    let runtime = crate::cli::runtime()?;
    runtime.block_on(async {
        let source_set = source_store.list().await.map_err(Error::from)?;

        let selection = if !names.is_empty() {
            Selection::Names(names)
        } else if all {
            Selection::All
        } else {
            let target_set = target_store.list().await.map_err(Error::from)?;
            let categories: BTreeSet<DiffCategory> = if categories.is_empty() {
                [DiffCategory::OnlyInSource, DiffCategory::ValueDiffers]
                    .into_iter()
                    .collect()
            } else {
                categories.into_iter().collect()
            };
            Selection::FromDiff {
                diff: diff::diff(&source_set, &target_set),
                categories,
            }
        };

        let plan = plan::plan(&source_set, &selection, target_store.id(), dry_run);
        for warning in &plan.warnings {
            output::warn(&warning.to_string());
        }
        if plan.is_empty() {
            output::success("already in sync");
            return Ok(());
        }

        let options = ExecuteOptions {
            concurrency,
            ..Default::default()
        };
        let cancel = options.cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });

        let outcomes = execute::execute(plan.operations, &target_store, &options).await;

        let mut synced = 0usize;
        let mut failed = 0usize;
        let mut cancelled = 0usize;
        for outcome in &outcomes {
            match &outcome.status {
                SyncStatus::Written => {
                    synced += 1;
                    output::success(&format!("synced {}", output::name(&outcome.name)));
                }
                SyncStatus::WouldWrite => {
                    synced += 1;
                    output::hint(&format!("would sync {}", outcome.name));
                }
                SyncStatus::Failed(err) => {
                    failed += 1;
                    output::error(&format!("{}: {}", outcome.name, err));
                }
                SyncStatus::Cancelled => {
                    cancelled += 1;
                    output::warn(&format!("{}: cancelled", outcome.name));
                }
            }
        }

        let mut summary = if dry_run {
            format!("would sync {} secrets", synced)
        } else {
            format!("{} synced", synced)
        };
        if failed > 0 {
            summary.push_str(&format!(", {} failed", failed));
        }
        if cancelled > 0 {
            summary.push_str(&format!(", {} cancelled", cancelled));
        }
        output::dimmed(&summary);

        if failed > 0 {
            return Err(Error::SyncIncomplete {
                failed,
                total: outcomes.len(),
            });
        }
        Ok(())
    })
}
