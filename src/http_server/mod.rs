//! # HTTP Server Module
//!
//! Axum server exposing the item handler over REST.
//!
//! # Endpoints
//!
//! - `POST /api/v1/number`, `POST /api/v1/text` - insert items
//! - `DELETE /api/v1/delete/:item_id` - delete an item
//! - `GET /api/v1/number/:item_id`, `GET /api/v1/text/:item_id` - refer items
//! - `GET /api/v1/count` - item counts
//! - `GET /api/v1/pingpong`, `/version`, `/health` - system endpoints

pub mod config;
pub mod errors;
pub mod item_routes;
pub mod server;
pub mod system_routes;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use server::HttpServer;
pub use system_routes::{api_prefix, api_version};
