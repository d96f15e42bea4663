//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use neograph_core::config::SolverConfig;
use neograph_core::document::GraphDocument;
use neograph_core::error::Result;
use neograph_core::graph::{Graph, MstStrategy};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: SolverConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: SolverConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Strategy from the flag, else the configured default
    pub fn strategy(&self, flag: Option<MstStrategy>) -> MstStrategy {
        flag.unwrap_or(self.config.strategy)
    }

    /// Bucket count from the flag, else the configured default
    pub fn bucket(&self, flag: Option<u64>) -> Result<usize> {
        match flag {
            Some(bucket) => match usize::try_from(bucket) {
                Ok(bucket) => Ok(bucket),
                Err(_) => neograph_core::bail_invalid!("bucket", bucket),
            },
            None => Ok(self.config.bucket),
        }
    }

    /// Read a graph document and build the graph it describes
    pub fn load_graph(&self, path: &Path) -> Result<Graph> {
        let graph = GraphDocument::load(path)?.into_graph()?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("neokruskal {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Minimum spanning trees with Prim, Kruskal and bucketed Kruskal.");
        println!();
        println!("Run `neokruskal --help` for usage information.");
        Ok(())
    }
}
