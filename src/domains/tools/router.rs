//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every registered descriptor becomes one route; the route hands the raw
//! arguments back to the registry, so STDIO and HTTP share a single dispatch
//! path.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .descriptors()
        .fold(ToolRouter::new(), |router, descriptor| {
            let name = descriptor.name().to_string();
            let registry = registry.clone();

            router.with_route(ToolRoute::new_dyn(
                descriptor.tool().clone(),
                move |ctx: ToolCallContext<'_, S>| {
                    let args = ctx.arguments.clone().unwrap_or_default();
                    let registry = registry.clone();
                    let name = name.clone();
                    async move { registry.call_tool(&name, args).map_err(McpError::from) }.boxed()
                },
            ))
        })
}
