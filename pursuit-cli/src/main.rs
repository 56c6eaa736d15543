//! Pursuit CLI - Command-line interface
//!
//! Commands:
//! - simulate: Play bot-driven games and report outcomes
//! - state: Print a freshly reset engine state as JSON

mod simulate;
mod state_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use simulate::SimulateArgs;
use state_cmd::StateArgs;

#[derive(Parser)]
#[command(name = "pursuit")]
#[command(about = "Pursuit on a shrinking grid graph")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play bot-driven games
    Simulate(SimulateArgs),
    /// Print the state after a reset
    State(StateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => simulate::run(args, cli.seed),
        Commands::State(args) => state_cmd::run(args, cli.seed),
    }
}
