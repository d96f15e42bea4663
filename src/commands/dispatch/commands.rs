//! Command implementations for all neokruskal commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use neograph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Solve(args) => crate::commands::solve::execute(ctx, args),
            Commands::Generate(args) => crate::commands::generate::execute(ctx, args),
            Commands::Bench(args) => crate::commands::bench::execute(ctx, args),
        }
    }
}
