//! List command - show secret names and metadata, never values.

use std::collections::BTreeMap;

use crate::cli::{output, resolve};
use crate::client::StoreClient;
use crate::core::secret::SecretMetadata;
use crate::error::Result;

pub fn execute(store: &str, json: bool) -> Result<()> {
    let client = resolve::open_store(store)?;

    let runtime = crate::cli::runtime()?;
    let set = runtime.block_on(client.list())?;

    if json {
        // Names and metadata only: values stay out of terminal scrollback.
        let listing: BTreeMap<&str, &SecretMetadata> = set
            .iter()
            .map(|record| (record.name(), record.metadata()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if set.is_empty() {
        output::dimmed("no secrets stored");
        return Ok(());
    }

    for name in set.names() {
        let record = set.get(name).expect("name came from the set");
        let meta = record.metadata();
        let mut notes = Vec::new();
        if let Some(version) = &meta.version {
            notes.push(version.clone());
        }
        if let Some(updated) = &meta.updated {
            notes.push(format!("updated {}", updated.format("%Y-%m-%d")));
        }
        if !meta.enabled {
            notes.push("disabled".to_string());
        }
        if notes.is_empty() {
            output::list_item(name);
        } else {
            output::list_item(&format!("{} ({})", name, notes.join(", ")));
        }
    }
    output::dimmed(&format!("{} secrets in {}", set.len(), client.id()));

    Ok(())
}
