//! State command - dump a reset engine state

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pursuit_core::{EngineConfig, GameEngine};

use crate::simulate::ModeArg;

#[derive(Args)]
pub struct StateArgs {
    /// Game mode
    #[arg(long, value_enum, default_value = "offense")]
    pub mode: ModeArg,

    /// Engine configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Reset an engine and print its state
pub fn run(args: StateArgs, seed: Option<u64>) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }

    let engine = GameEngine::new(config, args.mode.into()).context("Invalid engine configuration")?;
    let json = serde_json::to_string_pretty(&engine.state())?;
    println!("{}", json);
    Ok(())
}
