//! CLI commands for neokruskal

pub mod bench;
pub mod dispatch;
pub mod format;
pub mod generate;
pub mod solve;
