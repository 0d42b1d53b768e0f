//! CLI argument definitions using clap
//!
//! Commands:
//! - sample-backend serve [--config <path>] [--host <host>] [--port <port>]
//! - sample-backend check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sample backend server with REST API
#[derive(Parser, Debug)]
#[command(name = "sample-backend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overrides the configuration file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overrides the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate a configuration file, then print it
    CheckConfig {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["sample-backend", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_config_requires_path() {
        assert!(Cli::try_parse_from(["sample-backend", "check-config"]).is_err());
    }
}
