// ABOUTME: Route definitions for the textlog HTTP API.
// ABOUTME: Assembles all API routes into a single Axum Router with shared state and request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/log",
            get(api::log::read_log)
                .post(api::log::append_log)
                .delete(api::log::clear_log),
        )
        .route("/api/log/exit", post(api::log::save_and_exit))
        .route("/api/log/actions", post(api::log::submit_action))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use axum::body::Body;
    use http::Request;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tempfile::TempDir;
    use textlog_core::LogName;
    use textlog_store::TextLog;
    use tower::ServiceExt;

    fn test_state(dir: &TempDir) -> SharedState {
        Arc::new(AppState::new(TextLog::new(dir.path(), LogName::default())))
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let dir = TempDir::new().unwrap();
        let app = create_router(test_state(&dir));
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn read_fresh_log_is_empty() {
        let dir = TempDir::new().unwrap();
        let app = create_router(test_state(&dir));
        let resp = app
            .oneshot(Request::get("/api/log").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(json_body(resp).await["contents"], "");
    }

    #[tokio::test]
    async fn append_returns_accumulated_contents() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let resp = create_router(Arc::clone(&state))
            .oneshot(post_json("/api/log", serde_json::json!({ "text": "hello" })))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(json_body(resp).await["contents"], "hello\n");

        let resp = create_router(Arc::clone(&state))
            .oneshot(post_json("/api/log", serde_json::json!({ "text": "world" })))
            .await
            .unwrap();
        assert_eq!(json_body(resp).await["contents"], "hello\nworld\n");
        assert!(!state.shutdown_requested());
    }

    #[tokio::test]
    async fn delete_clears_log() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        create_router(Arc::clone(&state))
            .oneshot(post_json("/api/log", serde_json::json!({ "text": "x" })))
            .await
            .unwrap();

        let resp = create_router(Arc::clone(&state))
            .oneshot(Request::delete("/api/log").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(json_body(resp).await["contents"], "");

        let resp = create_router(state)
            .oneshot(Request::get("/api/log").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(json_body(resp).await["contents"], "");
    }

    #[tokio::test]
    async fn exit_saves_then_requests_shutdown() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let resp = create_router(Arc::clone(&state))
            .oneshot(post_json("/api/log/exit", serde_json::json!({ "text": "bye" })))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(json_body(resp).await["contents"], "bye\n");
        assert!(state.shutdown_requested());
    }

    #[tokio::test]
    async fn tagged_action_dispatches() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let resp = create_router(Arc::clone(&state))
            .oneshot(post_json(
                "/api/log/actions",
                serde_json::json!({ "type": "Append", "text": "via action" }),
            ))
            .await
            .unwrap();
        assert_eq!(json_body(resp).await["contents"], "via action\n");

        let resp = create_router(Arc::clone(&state))
            .oneshot(post_json(
                "/api/log/actions",
                serde_json::json!({ "type": "Clear" }),
            ))
            .await
            .unwrap();
        assert_eq!(json_body(resp).await["contents"], "");
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let dir = TempDir::new().unwrap();
        let app = create_router(test_state(&dir));

        let resp = app
            .oneshot(post_json("/api/log", serde_json::json!({ "wrong": 1 })))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn storage_failure_maps_to_500() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let state = Arc::new(AppState::new(TextLog::new(&missing, LogName::default())));

        let resp = create_router(Arc::clone(&state))
            .oneshot(post_json("/api/log/exit", serde_json::json!({ "text": "x" })))
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
        let json = json_body(resp).await;
        assert!(json["error"].as_str().unwrap().contains("failed to open"));
        assert!(
            !state.shutdown_requested(),
            "a failed save must not end the session"
        );
    }
}
