// ABOUTME: Shared application state for the textlog HTTP session.
// ABOUTME: Holds the serialized text log and the shutdown signal raised by save-and-exit.

use std::sync::Arc;

use textlog_store::TextLog;
use tokio::sync::{Mutex, watch};

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    /// One action in flight at a time.
    pub log: Mutex<TextLog>,
    shutdown_tx: watch::Sender<bool>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState serving the given text log.
    pub fn new(log: TextLog) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            log: Mutex::new(log),
            shutdown_tx,
        }
    }

    /// Ask the server to stop once in-flight requests have completed.
    pub fn request_shutdown(&self) {
        self.shutdown_tx.send_replace(true);
    }

    pub fn shutdown_requested(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Resolves once `request_shutdown` has been called.
    pub async fn wait_for_shutdown(&self) {
        let mut rx = self.shutdown_tx.subscribe();
        // The sender lives in self, so the channel cannot close under us.
        let _ = rx.wait_for(|requested| *requested).await;
    }
}
