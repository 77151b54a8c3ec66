//! HTTP server for the login flow.

pub mod pages;
pub mod routes;

use std::net::SocketAddr;

use crate::flow::AuthExchangeFlow;

/// Login service bound to one port.
#[derive(Debug)]
pub struct AuthServer {
    flow: AuthExchangeFlow,
}

impl AuthServer {
    /// Create a new server.
    #[must_use]
    pub fn new(flow: AuthExchangeFlow) -> Self {
        Self { flow }
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        if !self.flow.client_config().is_complete() {
            tracing::warn!(
                client = ?self.flow.client_config(),
                "Client configuration incomplete; login routes will answer 500"
            );
        }

        let router = routes::create_router(self.flow);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
