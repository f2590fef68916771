// ABOUTME: Presentation boundary for textlog: configuration, session actions, and the HTTP surface.
// ABOUTME: Uses Axum with a shared, serialized text log and a shutdown signal for save-and-exit.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;
pub mod server;
pub mod session;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, TextlogConfig};
pub use routes::create_router;
pub use server::{ServerError, serve};
