//! vaultdiff - diff and sync secrets between key-value secret stores.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultdiff::cli::output;
use vaultdiff::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("VAULTDIFF_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultdiff=debug")
        } else {
            EnvFilter::new("vaultdiff=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            vaultdiff::error::Error::Config(vaultdiff::error::ConfigError::UnknownStore {
                ..
            }) => Some("add it under [stores] in .vaultdiff.toml or pass a snapshot path"),
            vaultdiff::error::Error::SyncIncomplete { .. } => {
                Some("re-run with --name for each failed secret to retry")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
