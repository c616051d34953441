//! Get command - print one secret's value.

use crate::cli::resolve;
use crate::client::StoreClient;
use crate::error::Result;

pub fn execute(store: &str, name: &str) -> Result<()> {
    let client = resolve::open_store(store)?;

    let runtime = crate::cli::runtime()?;
    let value = runtime.block_on(client.get(name))?;

    // Bare value on stdout so it pipes cleanly.
    println!("{}", value);
    Ok(())
}
