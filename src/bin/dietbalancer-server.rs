// ABOUTME: HTTP server binary for the DietBalancer nutrition tracker
// ABOUTME: Loads configuration, wires file-backed storage and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

//! # DietBalancer Server Binary
//!
//! Serves the food log, summary, catalog and admin editor over HTTP with
//! state persisted under the configured data directory.

use anyhow::{Context, Result};
use clap::Parser;
use dietbalancer::{
    auth::{Authenticator, LocalAuthenticator},
    config::ServerConfig,
    logging::LoggingConfig,
    routes::{build_router, AppResources},
    storage::{FileStore, LocalStore},
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dietbalancer-server")]
#[command(about = "DietBalancer - daily nutrition tracking against recommended allowances")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    LoggingConfig::for_server(&config).init()?;

    info!("Starting DietBalancer server");
    info!("Configuration loaded from environment");
    info!("{}", config.summary());

    let store: Arc<dyn LocalStore> = Arc::new(FileStore::new(&config.data_dir));
    let authenticator: Arc<dyn Authenticator> = Arc::new(
        LocalAuthenticator::persistent(Arc::clone(&store), config.bcrypt_cost)
            .await
            .context("Failed to load local accounts")?,
    );
    info!("Local accounts loaded from {}", config.data_dir.display());

    let resources = Arc::new(AppResources::new(config.nutrition, store, authenticator));
    let app = build_router(resources, &config.cors_origins);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
