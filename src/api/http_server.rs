// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::try_on::try_on_handler;
use crate::config::RelayConfig;
use crate::tryon::TryOnBackend;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub backend: Arc<dyn TryOnBackend>,
}

/// Build the relay router
pub fn router(state: AppState) -> Router {
    // Room for two files at the per-file limit plus multipart framing;
    // per-file enforcement happens in the handler so the caller gets a 400
    let body_limit = state.config.max_upload_bytes * 2 + 64 * 1024;

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Try-on relay endpoint
        .route("/api/virtual-tryon", post(try_on_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(
    config: RelayConfig,
    backend: Arc<dyn TryOnBackend>,
) -> anyhow::Result<()> {
    let port = config.api_port;
    let state = AppState {
        config: Arc::new(config),
        backend,
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Try-on relay listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let collaborator = state.backend.health_check().await;
    Json(json!({
        "status": "ok",
        "collaborator": collaborator,
    }))
}
