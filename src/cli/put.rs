//! Put command - create or overwrite one secret.

use crate::cli::{output, resolve};
use crate::client::StoreClient;
use crate::error::Result;

pub fn execute(store: &str, name: &str, value: &str) -> Result<()> {
    let client = resolve::open_store(store)?;

    let runtime = crate::cli::runtime()?;
    runtime.block_on(client.put(name, value))?;

    output::success(&format!("set {} in {}", output::name(name), client.id()));
    Ok(())
}
