//! Shared output formatting helpers for commands

use neograph_core::error::Result;
use serde::Serialize;

// Re-export macros from cli::format for convenient access
pub use crate::output_by_format_result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Records header line: `H neokruskal=1 records=1 mode=<mode> key=value...`
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H neokruskal=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}
