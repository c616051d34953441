//! Command-line interface.

pub mod completions;
pub mod diff;
pub mod get;
pub mod list;
pub mod output;
pub mod put;
pub mod resolve;
pub mod sync;

use clap::{Parser, Subcommand};

use crate::core::diff::DiffCategory;
use crate::error::Result;

/// vaultdiff - diff and sync secrets between key-value secret stores.
#[derive(Parser)]
#[command(
    name = "vaultdiff",
    about = "Diff and sync secrets between key-value secret stores",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Compare two stores and categorize every secret
    Diff {
        /// Source store (alias from .vaultdiff.toml or snapshot path)
        source: String,
        /// Target store
        target: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Also list secrets that match exactly
        #[arg(long)]
        show_identical: bool,
    },

    /// Copy secrets from source to target
    Sync {
        /// Source store
        source: String,
        /// Target store
        target: String,
        /// Plan and report without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
        /// Sync only these names (repeatable)
        #[arg(long = "name", value_name = "NAME")]
        names: Vec<String>,
        /// Sync diff categories (repeatable; default: source-only and value-differs)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<DiffCategory>,
        /// Sync every secret in the source, ignoring the diff
        #[arg(long, conflicts_with_all = ["names", "categories"])]
        all: bool,
        /// Writes in flight at once
        #[arg(
            long,
            default_value_t = crate::core::execute::DEFAULT_CONCURRENCY,
            value_parser = parse_concurrency
        )]
        concurrency: usize,
    },

    /// List secret names and metadata in a store (never values)
    List {
        /// Store to list
        store: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one secret's value
    Get {
        /// Store to read from
        store: String,
        /// Secret name
        name: String,
    },

    /// Create or overwrite one secret
    Put {
        /// Store to write to
        store: String,
        /// Secret name
        name: String,
        /// Secret value
        value: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Reject a zero fan-out before it reaches the executor, which treats
/// it as a programming error and panics.
fn parse_concurrency(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s.parse().map_err(|err| format!("{}", err))?;
    if n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(n)
}

/// Execute a parsed command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Diff {
            source,
            target,
            json,
            show_identical,
        } => diff::execute(&source, &target, json, show_identical),
        Command::Sync {
            source,
            target,
            dry_run,
            names,
            categories,
            all,
            concurrency,
        } => sync::execute(&source, &target, dry_run, names, categories, all, concurrency),
        Command::List { store, json } => list::execute(&store, json),
        Command::Get { store, name } => get::execute(&store, &name),
        Command::Put { store, name, value } => put::execute(&store, &name, &value),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Build the runtime that hosts the async store clients.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}
