//! CLI command implementations

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use axum::http::HeaderValue;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Event, Logger, Severity};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    validate_config(&config)?;

    Ok(config)
}

/// Build the effective configuration: file (or defaults), then flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration values serde cannot check on its own
pub fn validate_config(config: &HttpServerConfig) -> CliResult<Severity> {
    if config.host.trim().is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }

    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }

    for origin in &config.cors_origins {
        if origin.parse::<HeaderValue>().is_err() {
            return Err(CliError::config_error(format!(
                "Invalid CORS origin: '{}'",
                origin
            )));
        }
    }

    config
        .log_level
        .parse::<Severity>()
        .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, host, port)?;
    let severity = validate_config(&config)?;
    let logger = Logger::console(severity);

    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    logger.log_event(Event::ConfigLoaded, &[("source", source.as_str())]);

    let server = HttpServer::with_config(config, logger);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load a configuration file and print the effective values as JSON
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
