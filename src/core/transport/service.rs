//! Transport service - orchestrates different transport types.
//!
//! This service provides a unified interface for starting the MCP server
//! with different transport mechanisms and tracks its lifecycle
//! (not started → serving → stopped).

use std::fmt;
use std::future::Future;
use tracing::info;

use super::shutdown::shutdown_signal;
use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Lifecycle of a transport service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    NotStarted,
    Serving,
    Stopped,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::Serving => "serving",
            Self::Stopped => "stopped",
        };
        f.write_str(label)
    }
}

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
    state: ServiceState,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self {
            config,
            state: ServiceState::NotStarted,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ServiceState {
        self.state
    }

    fn transition(&mut self, next: ServiceState) {
        info!("Transport {} -> {}", self.state, next);
        self.state = next;
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down (client
    /// disconnect for STDIO, interrupt signal for both). The service is
    /// `Stopped` afterwards whether the transport ended cleanly or not.
    pub async fn run(&mut self, server: McpServer) -> TransportResult<()> {
        self.run_with_shutdown(server, shutdown_signal()).await
    }

    /// Start the transport and stop it once `shutdown` resolves.
    pub async fn run_with_shutdown(
        &mut self,
        server: McpServer,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());
        self.transition(ServiceState::Serving);

        let result = match self.config.clone() {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run_with_shutdown(server, shutdown).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => {
                HttpTransport::new(cfg)
                    .run_with_shutdown(server, shutdown)
                    .await
            }
        };

        self.transition(ServiceState::Stopped);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service_is_not_started() {
        let service = TransportService::new(TransportConfig::default());
        assert_eq!(service.state(), ServiceState::NotStarted);
        assert_eq!(service.state().to_string(), "not started");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_bind_failure_stops_service() {
        use crate::core::Config;

        // Occupy a port so the transport cannot bind it
        let blocker = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = blocker.local_addr().unwrap().port();

        let mut service = TransportService::new(TransportConfig::http(port, "127.0.0.1"));
        let server = McpServer::new(Config::default()).unwrap();

        let result = service.run(server).await;
        tokio_test::assert_err!(result);
        assert_eq!(service.state(), ServiceState::Stopped);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_shutdown_stops_service_and_releases_port() {
        use crate::core::Config;
        use std::time::Duration;
        use tokio::net::{TcpListener, TcpStream};
        use tokio::sync::oneshot;

        // Find a free port, then hand it to the transport
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let mut service = TransportService::new(TransportConfig::http(port, "127.0.0.1"));
        let server = McpServer::new(Config::default()).unwrap();

        let handle = tokio::spawn(async move {
            let result = service
                .run_with_shutdown(server, async move {
                    let _ = stop_rx.await;
                })
                .await;
            (service, result)
        });

        let mut accepted = false;
        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
                accepted = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(accepted, "transport never started listening");

        stop_tx.send(()).unwrap();
        let (service, result) = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("transport did not stop")
            .unwrap();

        tokio_test::assert_ok!(result);
        assert_eq!(service.state(), ServiceState::Stopped);

        // The listening socket is released
        TcpListener::bind(("127.0.0.1", port)).await.unwrap();
    }
}
