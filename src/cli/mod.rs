//! CLI layer - Command-line interface

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::{Cli, USAGE};
pub use logging::init_logging;
pub use output::{format_pivot, format_violations};
