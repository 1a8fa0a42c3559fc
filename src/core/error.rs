//! Error types for the MCP server library.
//!
//! Building a server can only fail while registering tools; transport
//! failures keep their own [`TransportError`](super::transport::TransportError).

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),
}
