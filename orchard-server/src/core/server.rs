//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::net::SocketAddr;

use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state (shared with oneshot callers)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_addr()
            .parse()
            .map_err(|_| ServerError::BindAddress(self.config.bind_addr()))?;

        if self.state.is_development_mode() {
            tracing::warn!("Serving built-in fallbacks; mutations are disabled");
        }

        tracing::info!(
            %addr,
            environment = %self.config.environment,
            "🍎 Orchard server listening"
        );

        self.state.https.start_server(addr, shutdown_signal()).await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C
///
/// Without a signal handler the server keeps running until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down..."),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
