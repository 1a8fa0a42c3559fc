//! Transport layer for the MCP server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: HTTP server with JSON-RPC over POST requests (default) - feature: `http`
//! - **STDIO**: Standard input/output - feature: `stdio`
//!
//! Each transport handles the connection lifecycle, stops on Ctrl+C /
//! SIGTERM, and delegates message processing to the MCP server handler.
//!
//! # Feature Flags
//!
//! Transport implementations are conditionally compiled based on features:
//! - `http` (default): HTTP transport - adds axum, tower, tower-http
//! - `stdio`: STDIO transport - minimal dependencies

mod config;
mod error;
mod service;
mod shutdown;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::{ServiceState, TransportService};
pub use shutdown::shutdown_signal;

#[cfg(feature = "http")]
pub use config::HttpConfig;
