// ABOUTME: HTTP server lifecycle for the textlog session.
// ABOUTME: Binds the listener and serves until save-and-exit or Ctrl-C, then drains gracefully.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::app_state::SharedState;
use crate::routes::create_router;

/// Errors that can occur when starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("bind failed on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("serve error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Serve the text log API on `addr` until a save-and-exit request or
/// Ctrl-C arrives. In-flight requests finish before this returns.
pub async fn serve(addr: SocketAddr, state: SharedState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local = listener.local_addr().unwrap_or(addr);
    tracing::info!(%local, "textlog listening");

    run(listener, state).await
}

/// Serve on an already-bound listener.
pub async fn run(listener: TcpListener, state: SharedState) -> Result<(), ServerError> {
    let router = create_router(Arc::clone(&state));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("textlog stopped");
    Ok(())
}

async fn shutdown_signal(state: SharedState) {
    tokio::select! {
        _ = state.wait_for_shutdown() => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!("failed to listen for Ctrl-C: {}", e);
                // Fall back to the save-and-exit signal alone.
                state.wait_for_shutdown().await;
            } else {
                tracing::info!("Ctrl-C received");
            }
        }
    }
}
