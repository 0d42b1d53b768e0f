//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, CORS, static files
//! and log level.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8930)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin without credentials
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Directory served under `/icons`, with `favicon.ico` at the root
    #[serde(default)]
    pub static_dir: Option<String>,

    /// Minimum log severity (default: "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8930
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://frontend:3000".to_string(),
    ]
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            static_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8930);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.static_dir, None);
        assert_eq!(config.log_level, "INFO");
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.cors_origins, default_cors_origins());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<HttpServerConfig>(r#"{"workers": 4}"#).is_err());
    }
}
