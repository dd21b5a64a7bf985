//! HTTP boundary
//!
//! Exposes the ledger store over JSON:
//! - `config` - Listen address, shard size and HTTP limits
//! - `state` - Shared handler state holding the store
//! - `error` - Mapping of decode and store failures to HTTP responses
//! - `handlers` - Request decoding and store calls
//! - `routes` - Router and middleware layers

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::core::InMemoryStore;

/// Build an in-memory store from `config` and serve it until shutdown.
///
/// # Errors
///
/// Returns an I/O error if the listen address cannot be bound or the
/// server fails while accepting connections.
pub async fn serve(config: ServiceConfig) -> std::io::Result<()> {
    let store = Arc::new(InMemoryStore::new(config.cluster_size));
    let state = AppState::new(store, config.clone());
    let app = create_router(state);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(
        listen_addr = %config.listen_addr,
        cluster_size = config.cluster_size,
        "ledger service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ledger service stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
