//! Development tasks for the hearthwild workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{ReadState, Simulate};
use tracing_subscriber::EnvFilter;

/// Development tasks for hearthwild
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for hearthwild", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a headless game with a scripted player
    Simulate(Simulate),

    /// Read and inspect a saved state file
    ReadState(ReadState),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(),
        Command::ReadState(cmd) => cmd.execute(),
    }
}
