//! Tool handler abstractions.
//!
//! Every tool implements [`ToolDefinition`]: a name, a description, a typed
//! parameter struct, a typed output, optional argument validation and a
//! synchronous `execute`. [`ToolDescriptor::of`] turns a definition into a
//! registry entry by deriving its JSON schemas and erasing the types behind a
//! handler that takes raw JSON arguments.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use super::error::ToolError;

/// Type-erased handler stored in a [`ToolDescriptor`].
pub type ToolHandlerFn = dyn Fn(JsonObject) -> Result<CallToolResult, ToolError> + Send + Sync;

// ============================================================================
// Tool Definition
// ============================================================================

/// A statically typed tool.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP. Must be unique within a registry.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Value produced by the tool.
    type Output: Serialize + JsonSchema + 'static;

    /// Semantic checks that the type system cannot express.
    ///
    /// Runs after deserialization and before [`ToolDefinition::execute`].
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }

    /// Execute the tool logic.
    fn execute(params: Self::Params) -> Self::Output;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: Some(output_schema_for::<Self::Output>()),
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Wrapper used for outputs that are not JSON objects.
///
/// Structured content must be an object, so scalars and lists are reported
/// as `{"result": <value>}`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

fn output_schema_for<T: JsonSchema + 'static>() -> Arc<JsonObject> {
    let schema = cached_schema_for_type::<T>();
    if schema.get("type").and_then(|t| t.as_str()) == Some("object") {
        schema
    } else {
        cached_schema_for_type::<ResultEnvelope<T>>()
    }
}

/// Convert a tool output into an MCP result.
///
/// The text content carries the JSON rendering of the value; the structured
/// content carries the value itself, wrapped in [`ResultEnvelope`] when it is
/// not an object.
pub fn into_call_result<T: Serialize>(output: &T) -> Result<CallToolResult, ToolError> {
    let value = serde_json::to_value(output)
        .map_err(|e| ToolError::internal(format!("Failed to serialize tool output: {}", e)))?;

    let text = serde_json::to_string(&value)
        .map_err(|e| ToolError::internal(format!("Failed to render tool output: {}", e)))?;

    let structured = if value.is_object() {
        value
    } else {
        serde_json::json!({ "result": value })
    };

    Ok(CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(structured),
        is_error: Some(false),
        meta: None,
    })
}

// ============================================================================
// Tool Descriptor
// ============================================================================

/// One declared parameter of a tool, read back from its input schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    /// JSON Schema type name (`"number"`, `"string"`, `"integer"`, ...).
    pub kind: String,
    pub required: bool,
    pub default: Option<serde_json::Value>,
    pub description: Option<String>,
}

/// Registry entry: tool metadata plus the handler that serves it.
#[derive(Clone)]
pub struct ToolDescriptor {
    tool: Tool,
    handler: Arc<ToolHandlerFn>,
}

impl ToolDescriptor {
    /// Build a descriptor from raw metadata and an untyped handler.
    pub fn new<F>(tool: Tool, handler: F) -> Self
    where
        F: Fn(JsonObject) -> Result<CallToolResult, ToolError> + Send + Sync + 'static,
    {
        Self {
            tool,
            handler: Arc::new(handler),
        }
    }

    /// Build a descriptor for a typed tool definition.
    pub fn of<T: ToolDefinition>() -> Self {
        Self::new(T::to_tool(), |arguments| {
            let params: T::Params = serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| {
                    warn!("Rejected arguments for {}: {}", T::NAME, e);
                    ToolError::invalid_arguments(e.to_string())
                })?;

            T::validate(&params).inspect_err(|e| {
                warn!("Validation failed for {}: {}", T::NAME, e);
            })?;

            into_call_result(&T::execute(params))
        })
    }

    /// Tool name.
    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// Tool metadata as exposed by `tools/list`.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Declared parameters, in the order the input schema lists them.
    pub fn parameters(&self) -> Vec<ParameterSpec> {
        let schema = &self.tool.input_schema;

        let required: Vec<&str> = schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();

        let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) else {
            return Vec::new();
        };

        properties
            .iter()
            .map(|(name, prop)| ParameterSpec {
                name: name.clone(),
                kind: schema_type_name(prop),
                required: required.contains(&name.as_str()),
                default: prop.get("default").cloned(),
                description: prop
                    .get("description")
                    .and_then(|d| d.as_str())
                    .map(str::to_string),
            })
            .collect()
    }

    /// Run the handler with the given arguments.
    pub fn invoke(&self, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        (self.handler)(arguments)
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.tool.name)
            .field("description", &self.tool.description)
            .finish_non_exhaustive()
    }
}

fn schema_type_name(prop: &serde_json::Value) -> String {
    match prop.get("type") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(types)) => types
            .iter()
            .filter_map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("|"),
        _ => "any".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
