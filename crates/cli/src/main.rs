//! Command-line front end for the fixture registry
//!
//! Seeds an in-memory registry from a JSON file, then dumps it, queries it,
//! or replays a script of operations against it.
//! Run with: `fixtures --seed events.json <command>`

mod commands;
mod config;
mod dirs;
mod logging;
mod seed;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Dump, Query, Run};
use config::CliConfig;
use registry::{ConcurrencyMode, RegistryService};

/// Inspect and drive an in-memory fixture registry
#[derive(Parser)]
#[command(name = "fixtures")]
#[command(about = "In-memory sporting fixture registry", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON array of events loaded before the command runs
    /// (overrides FIXTURES_SEED_FILE)
    #[arg(long, global = true, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// How compound updates publish: optimistic or unchecked
    /// (overrides FIXTURES_CONCURRENCY)
    #[arg(long, global = true, value_name = "MODE")]
    concurrency: Option<ConcurrencyMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the registry as JSON keyed by event id
    Dump(Dump),

    /// List incomplete events matching the given filters
    Query(Query),

    /// Replay a JSON script of operations
    Run(Run),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let _guard = logging::setup_logging(&config.logging)?;

    let registry = RegistryService::in_memory()
        .with_mode(cli.concurrency.unwrap_or(config.concurrency));
    tracing::debug!(mode = %registry.mode(), "registry ready");

    if let Some(path) = cli.seed.or(config.seed_file) {
        seed::load_into(&registry, &path)?;
    }

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Dump(cmd) => cmd.execute(&registry, &mut stdout),
        Command::Query(cmd) => cmd.execute(&registry, &mut stdout),
        Command::Run(cmd) => cmd.execute(&registry, &mut stdout),
    }
}
