//! NeoKruskal - minimum spanning trees over point sets
//!
//! Reads graph documents, runs one of the Prim or Kruskal strategies from
//! `neograph-core`, and prints the solution or timing in human, JSON or
//! records format.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use neograph_core::error::GraphError;
use neograph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print an error in the requested format and map it to the process exit code
fn report(error: &GraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if !quiet => eprintln!("error: {}", error),
        _ => {}
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Argument errors never reach `Cli`, so JSON output is detected from argv.
/// Help and version output, and every non-JSON run, keep clap's own rendering.
fn parse_failure(err: clap::Error) -> ExitCode {
    if !err.use_stderr() || requested_format() != Some(OutputFormat::Json) {
        err.exit();
    }
    report(&GraphError::UsageError(err.to_string()), OutputFormat::Json, false)
}

/// Value of the first `--format` flag on the command line, if it names a format
fn requested_format() -> Option<OutputFormat> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(inline) => match inline.strip_prefix('=') {
                Some(value) => Some(value.to_string()),
                None => continue,
            },
            None => continue,
        };
        return value.and_then(|v| v.parse().ok());
    }
    None
}
