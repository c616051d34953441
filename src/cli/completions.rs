//! Completions command.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

/// Write a completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "vaultdiff", &mut std::io::stdout());
    Ok(())
}
