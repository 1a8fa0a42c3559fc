//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are stateless functions that MCP clients invoke by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - `ToolDefinition` trait and the type-erased `ToolDescriptor`
//! - `registry.rs` - Explicit name → descriptor registry and dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry (STDIO transport)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct and implement `ToolDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::builtin()`
//!
//! Both transports pick it up from the registry.

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::{
    ParameterSpec, ResultEnvelope, ToolDefinition, ToolDescriptor, ToolHandlerFn, into_call_result,
};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
