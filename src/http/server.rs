//! HTTP server implementation for the dashboard API

use axum::{
    routing::{get, post},
    Router,
};
use crate::pipeline::NetworkPipeline;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use super::handler::{
    diseases_handler, genes_handler, network_handler, status_handler, AppState,
};

/// Build the API router over shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/diseases", get(diseases_handler))
        .route("/api/genes/:pathway_id", get(genes_handler))
        .route("/api/network", post(network_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server exposing the network pipeline
pub struct HttpServer {
    pipeline: Arc<NetworkPipeline>,
    addr: String,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(pipeline: Arc<NetworkPipeline>, addr: impl Into<String>) -> Self {
        Self { pipeline, addr: addr.into() }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(AppState {
            pipeline: Arc::clone(&self.pipeline),
        });

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;

        info!("Dashboard API available at http://{}", self.addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
