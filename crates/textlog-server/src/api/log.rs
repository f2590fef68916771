// ABOUTME: Text log API handlers for reading, appending, clearing, and save-and-exit.
// ABOUTME: Each handler runs one session action and responds with the contents to display.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use textlog_core::Action;

use crate::app_state::SharedState;
use crate::session;

/// Request body carrying text to append.
#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub text: String,
}

/// Response body with the contents to display.
#[derive(Debug, Serialize)]
pub struct ContentsResponse {
    pub contents: String,
}

/// GET /api/log - Read the accumulated contents.
pub async fn read_log(State(state): State<SharedState>) -> Response {
    run(&state, Action::Read).await
}

/// POST /api/log - Append text and return the refreshed contents.
pub async fn append_log(
    State(state): State<SharedState>,
    Json(req): Json<AppendRequest>,
) -> Response {
    run(&state, Action::Append { text: req.text }).await
}

/// DELETE /api/log - Discard all prior contents.
pub async fn clear_log(State(state): State<SharedState>) -> Response {
    run(&state, Action::Clear).await
}

/// POST /api/log/exit - Append text, respond, then stop the server.
pub async fn save_and_exit(
    State(state): State<SharedState>,
    Json(req): Json<AppendRequest>,
) -> Response {
    run(&state, Action::SaveAndExit { text: req.text }).await
}

/// POST /api/log/actions - Run any tagged action.
pub async fn submit_action(
    State(state): State<SharedState>,
    Json(action): Json<Action>,
) -> Response {
    run(&state, action).await
}

async fn run(state: &SharedState, action: Action) -> Response {
    let result = {
        let log = state.log.lock().await;
        session::apply(&log, &action)
    };

    match result {
        Ok(contents) => {
            // A failed save keeps the session alive so the client can retry.
            if action.terminates() {
                tracing::info!("save-and-exit requested, shutting down");
                state.request_shutdown();
            }
            (StatusCode::OK, Json(ContentsResponse { contents })).into_response()
        }
        Err(e) => {
            tracing::error!("text log action failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
