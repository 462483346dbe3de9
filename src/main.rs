// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{net::SocketAddr, sync::Arc};

use smiles_gateway::{
    api::router,
    config::{Config, LOG_FORMAT_ENV},
    normalizer::HttpNormalizer,
    pipeline::RequestPipeline,
    secrets::{self, SecretStore},
    state::AppState,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = std::env::var(LOG_FORMAT_ENV).as_deref() == Ok("json");
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration invalid");
            std::process::exit(1);
        }
    };

    // Fetch the API key secret exactly once. A failure here is fatal: the
    // process must not serve traffic without a comparison secret.
    let store = secrets::store_for(&config);
    let secret = match store.fetch(&config.secret_name).await {
        Ok(secret) => secret,
        Err(e) => {
            tracing::error!(error = %e, backend = ?config.secret_backend, "Failed to fetch API key secret");
            std::process::exit(1);
        }
    };
    tracing::info!(backend = ?config.secret_backend, "API key secret loaded");

    let normalizer = Arc::new(HttpNormalizer::new(config.normalizer_url.clone()));
    let state = AppState::new(RequestPipeline::new(secret, normalizer));
    let app = router(state);

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, addr = %config.bind_addr(), "Failed to parse bind address");
            std::process::exit(1);
        }
    };

    tracing::info!("SMILES gateway listening on http://{addr} (docs at /docs)");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
