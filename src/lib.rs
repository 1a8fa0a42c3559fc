//! VSCode MCP Server Library
//!
//! A basic Model Context Protocol (MCP) server exposing three demo tools to
//! an editor extension:
//!
//! - `add_numbers`: sum of two numbers
//! - `get_weather`: simulated multi-day forecast for a location
//! - `list_files`: entry names of a directory
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the `McpServer` handler and the
//!   HTTP / STDIO transports
//! - **domains::tools**: tool definitions, the explicit tool registry and the
//!   rmcp router built from it
//!
//! # Example
//!
//! ```rust,no_run
//! use vscode_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
