// ABOUTME: HTTP server lifecycle: bind, serve the application router, shut down on Ctrl-C
// ABOUTME: All routes and layers come from the route module's router builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use crate::routes::build_router;
use anyhow::{Context, Result};
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Jobly HTTP server
pub struct JoblyServer {
    resources: Arc<ServerResources>,
}

impl JoblyServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// The complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.resources))
    }

    /// Serve on `port` until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails.
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
        info!("HTTP server listening on http://{addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for Ctrl-C signal: {e}"),
    }
}
