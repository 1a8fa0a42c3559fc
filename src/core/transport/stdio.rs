//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP, served by rmcp.

use rmcp::ServiceExt;
use std::future::Future;
use tracing::info;

use super::shutdown::shutdown_signal;
use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects or the process
    /// is interrupted.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        Self::run_with_shutdown(server, shutdown_signal()).await
    }

    /// Run the STDIO transport until the client disconnects or `shutdown`
    /// resolves.
    pub async fn run_with_shutdown(
        server: McpServer,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let cancel = service.cancellation_token();
        tokio::spawn(async move {
            shutdown.await;
            cancel.cancel();
        });

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished: {:?}", reason);
        Ok(())
    }
}
