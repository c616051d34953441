//! Diff command - categorize every secret across two stores.

use crate::cli::{output, resolve};
use crate::client::StoreClient;
use crate::core::diff;
use crate::error::Result;

/// Compare two stores and print the categorized report.
pub fn execute(source: &str, target: &str, json: bool, show_identical: bool) -> Result<()> {
    let source_store = resolve::open_store(source)?;
    let target_store = resolve::open_store(target)?;

    let runtime = crate::cli::runtime()?;
    let (source_set, target_set) = runtime.block_on(async {
        let source_set = source_store.list().await?;
        let target_set = target_store.list().await?;
        Ok::<_, crate::error::Error>((source_set, target_set))
    })?;

    let result = diff::diff(&source_set, &target_set);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for name in &result.only_in_source {
        println!("+ {} (source only)", output::name(name));
    }
    for name in &result.only_in_target {
        println!("- {} (target only)", output::name(name));
    }
    for name in &result.value_differs {
        println!("~ {} (value differs)", output::name(name));
    }
    for name in &result.metadata_differs {
        println!("≈ {} (metadata differs)", output::name(name));
    }
    if show_identical {
        for name in &result.identical {
            println!("✓ {}", name);
        }
    }

    if result.is_identical() {
        output::success(&format!(
            "{} and {} are in sync ({} secrets)",
            source_store.id(),
            target_store.id(),
            result.identical.len()
        ));
    } else {
        output::dimmed(&format!(
            "{} source only, {} target only, {} value, {} metadata, {} identical",
            result.only_in_source.len(),
            result.only_in_target.len(),
            result.value_differs.len(),
            result.metadata_differs.len(),
            result.identical.len()
        ));
    }

    Ok(())
}
