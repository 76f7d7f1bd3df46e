// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc, time::Duration};
use tryon_relay_node::{api, config::RelayConfig, tryon::TryOnClient, version};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    // Load .env before reading configuration
    dotenv::dotenv().ok();

    println!("🚀 Starting Try-On Relay Node...\n");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!();

    let config = RelayConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    let client = TryOnClient::new(
        &config.tryon_endpoint,
        Duration::from_secs(config.tryon_timeout_secs),
    )?;

    println!("🌐 HTTP listening on http://0.0.0.0:{}", config.api_port);
    println!("🎨 Try-on service at {}", client.endpoint());

    api::start_server(config, Arc::new(client)).await
}
