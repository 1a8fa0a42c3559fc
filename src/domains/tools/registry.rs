//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - An explicit name → descriptor map, populated at startup
//! - Dispatch for tool calls (used directly by the HTTP transport and
//!   through the rmcp router for STDIO)
//! - Tool metadata for listing

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::definitions::{AddNumbersTool, GetWeatherTool, ListFilesTool};
use super::error::ToolError;
use super::handlers::{ToolDefinition, ToolDescriptor};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Names are unique: a second registration under an existing name is
/// rejected and the first descriptor stays in effect.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tools.
    pub fn builtin() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register_tool::<AddNumbersTool>()?;
        registry.register_tool::<GetWeatherTool>()?;
        registry.register_tool::<ListFilesTool>()?;
        Ok(registry)
    }

    /// Register a descriptor under its tool name.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        match self.tools.entry(descriptor.name().to_string()) {
            Entry::Occupied(entry) => {
                warn!("Refusing duplicate registration of tool '{}'", entry.key());
                Err(ToolError::duplicate(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                info!("Registered tool '{}'", entry.key());
                entry.insert(descriptor);
                Ok(())
            }
        }
    }

    /// Register a typed tool definition.
    pub fn register_tool<T: ToolDefinition>(&mut self) -> Result<(), ToolError> {
        self.register(ToolDescriptor::of::<T>())
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    /// All registered descriptors, ordered by name.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.values().map(|d| d.tool().clone()).collect()
    }

    /// Dispatch a tool call to the matching descriptor.
    #[instrument(skip(self, arguments))]
    pub fn call_tool(&self, name: &str, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let Some(descriptor) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        info!("Dispatching tool call");
        descriptor.invoke(arguments)
    }
}
