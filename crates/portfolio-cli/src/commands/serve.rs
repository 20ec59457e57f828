//! Serve command implementation.
//!
//! Runs the contact-form mail relay until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

use portfolio_api::{create_api_router, create_api_state_with_origins};
use portfolio_mail::{MailRoute, SmtpMailer};

use crate::config::ServeConfig;

/// Execute the serve command.
///
/// Everything that can fail on configuration is checked before the port is
/// bound.
pub async fn execute(config: ServeConfig) -> Result<()> {
    let mailer = SmtpMailer::from_config(&config.mail).context("Failed to set up SMTP transport")?;
    let route = MailRoute::from_config(&config.mail).context("Invalid mail address")?;

    let state = create_api_state_with_origins(Arc::new(mailer), route, config.cors_origins);
    let app = create_api_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local = listener.local_addr()?;

    info!(addr = %local, "server_listening");
    println!("🚀 Server running on port {}", local.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server_stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
