//! `CodeGuardian AI` landing site entry point.
//!
//! Loads configuration, renders the landing page once, then starts the Axum
//! HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use codeguardian_core::LandingPage;
use codeguardian_server::config::ServerConfig;
use codeguardian_server::routes::build_router;
use codeguardian_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "CodeGuardian site starting");

    let install_url = config
        .install_url()
        .context("invalid GitHub App install URL configuration")?;

    if install_url.is_placeholder() {
        warn!(
            install_url = %install_url,
            "install link still points at the placeholder; set GITHUB_APP_INSTALL_URL or GITHUB_APP_SLUG"
        );
    } else {
        info!(install_url = %install_url, "install link configured");
    }

    let state = Arc::new(AppState::new(LandingPage::new(install_url)));
    let app = build_router(state, config.max_concurrent_requests);

    // Bind and serve.
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "CodeGuardian site listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("CodeGuardian site stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
