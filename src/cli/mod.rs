//! CLI argument parsing for neokruskal
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod format;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BenchArgs, GenerateArgs, SolveArgs};
pub use neograph_core::format::OutputFormat;

/// NeoKruskal - minimum spanning trees over point sets
#[derive(Parser, Debug)]
#[command(name = "neokruskal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "neograph_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Solver configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "NEOGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a minimum spanning tree for a graph document
    Solve(SolveArgs),

    /// Print a random graph document as JSON
    Generate(GenerateArgs),

    /// Time repeated runs of one strategy
    Bench(BenchArgs),
}
