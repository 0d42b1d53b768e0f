//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{
    check_config, load_config, resolve_config, run, run_command, serve, validate_config,
};
pub use errors::{CliError, CliErrorCode, CliResult};
