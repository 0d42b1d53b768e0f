//! sample-backend - Sample backend server with REST API
//!
//! Item validation, error taxonomy and a stateless handler, served over axum.

pub mod cli;
pub mod dto;
pub mod handler;
pub mod http_server;
pub mod observability;
