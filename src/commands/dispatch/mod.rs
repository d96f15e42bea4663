//! Command dispatch logic for neokruskal

use std::time::Instant;

use crate::cli::Cli;
use neograph_core::config::SolverConfig;
use neograph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = SolverConfig::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), strategy = %config.strategy, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
