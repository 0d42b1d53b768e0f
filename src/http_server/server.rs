//! # HTTP Server
//!
//! Main HTTP server combining the item and system routers under the API
//! prefix, with CORS and optional static files.

use std::path::Path;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handler::ItemHandler;
use crate::observability::{Event, Logger};

use super::config::HttpServerConfig;
use super::item_routes::item_routes;
use super::system_routes::{api_prefix, system_routes};

/// HTTP server for the sample backend
pub struct HttpServer {
    config: HttpServerConfig,
    logger: Logger,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(logger: Logger) -> Self {
        Self::with_config(HttpServerConfig::default(), logger)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, logger: Logger) -> Self {
        let router = Self::build_router(&config, &logger);
        Self {
            config,
            logger,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, logger: &Logger) -> Router {
        let handler = Arc::new(ItemHandler::new(logger.clone()));

        let api = Router::new()
            .merge(item_routes(handler))
            .merge(system_routes(logger.clone()));

        let mut router = Router::new().nest(&api_prefix(), api);

        if let Some(dir) = &config.static_dir {
            router = router
                .nest_service("/icons", ServeDir::new(dir))
                .route_service("/favicon.ico", ServeFile::new(Path::new(dir).join("favicon.ico")));
        }

        router.layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        // Credentials forbid wildcards, so methods and headers are mirrored
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        let prefix = api_prefix();
        self.logger.log_event(
            Event::ServerListening,
            &[("addr", addr.as_str()), ("api_prefix", prefix.as_str())],
        );

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await;

        if let Err(ref e) = result {
            let reason = e.to_string();
            self.logger
                .log_event(Event::ServerFailed, &[("reason", reason.as_str())]);
        }
        result
    }
}
