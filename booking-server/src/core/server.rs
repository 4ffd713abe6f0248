//! HTTP server lifecycle

use anyhow::Context;

use super::{Config, ServerState};

/// The BFF HTTP server.
pub struct Server {
    state: ServerState,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            state: ServerState::new(config),
        }
    }

    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Bind the listener and serve until shutdown is requested.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = format!("0.0.0.0:{}", self.state.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        tracing::info!(
            backend = %self.state.config.backend_url,
            "booking-server listening on {addr}"
        );

        let app = crate::api::build_app(self.state);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        tracing::info!("booking-server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
