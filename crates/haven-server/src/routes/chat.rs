//! Chat API routes: `/api/chat`, `/api/reset`, `/api/status`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::cookie::SessionCookie;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(chat))
        .route("/reset", post(reset))
        .route("/status", get(status))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

/// POST /api/chat — answer one message in the cookie's session.
async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let secret = &state.config.secret_key;
    let session = SessionCookie::resolve(&headers, secret);
    let response_headers = session.response_headers(secret);

    if req.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            response_headers,
            Json(serde_json::json!({ "error": "Message is required" })),
        );
    }

    let reply = state.converse(&session.id, &req.message).await;

    (
        StatusCode::OK,
        response_headers,
        Json(serde_json::json!({
            "response": reply.text,
            "session_id": session.id,
        })),
    )
}

/// POST /api/reset — forget the session's history and start a new one.
async fn reset(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let secret = &state.config.secret_key;
    let previous = SessionCookie::resolve(&headers, secret);
    if !previous.is_new {
        state.responder.reset(&previous.id);
    }

    let session = SessionCookie::fresh();
    info!("Session {} replaced by {}", previous.id, session.id);

    (
        session.response_headers(secret),
        Json(serde_json::json!({
            "status": "success",
            "message": "Conversation has been reset",
            "session_id": session.id,
        })),
    )
}

/// GET /api/status — whether a model is backing the conversation.
async fn status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "model_available": state.responder.model_available(),
        "model": state.responder.model_name(),
        "sessions": state.responder.sessions().len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
    use axum::http::Request;
    use haven_chat::content::CRISIS_RESPONSE;
    use haven_infer::{ReplyGenerator, Turn};
    use serde_json::Value;

    use crate::routes::build_router;
    use crate::routes::test_support::{cookie_pair, send};
    use crate::state::test_state;

    struct EchoGenerator;

    #[async_trait]
    impl ReplyGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str, _history: &[Turn]) -> haven_core::Result<String> {
            Ok(format!("You said {} to me.", prompt))
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    fn chat_request(message: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder
            .body(Body::from(serde_json::json!({ "message": message }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_crisis_message_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), None);
        let app = build_router(state.clone());

        let (status, headers, body) = send(&app, chat_request("I want to end my life", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers.get(SET_COOKIE).is_some());

        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["response"], CRISIS_RESPONSE);
        let session_id = v["session_id"].as_str().unwrap();
        assert!(!session_id.is_empty());

        let log = state.transcripts.read(session_id);
        assert_eq!(log.conversations.len(), 1);
        assert_eq!(log.conversations[0].user_message, "I want to end my life");
        assert_eq!(log.conversations[0].bot_response, CRISIS_RESPONSE);

        let lines = std::fs::read_to_string(dir.path().join("sessions.log")).unwrap();
        assert!(lines.contains("| User: I want to end my life | Bot: I'm really concerned"));
    }

    #[tokio::test]
    async fn test_cookie_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), None);
        let app = build_router(state.clone());

        let (_, headers, body) = send(&app, chat_request("hello", None)).await;
        let first: Value = serde_json::from_slice(&body).unwrap();
        let cookie = cookie_pair(&headers).unwrap();

        let (status, headers, body) = send(&app, chat_request("hello again", Some(&cookie))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers.get(SET_COOKIE).is_none());
        let second: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(first["session_id"], second["session_id"]);

        let log = state.transcripts.read(second["session_id"].as_str().unwrap());
        assert_eq!(log.conversations.len(), 2);
    }

    #[tokio::test]
    async fn test_forged_cookie_gets_new_session() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path(), None));

        let (_, headers, body) =
            send(&app, chat_request("hello", Some("haven_session=victim.deadbeef"))).await;
        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_ne!(v["session_id"], "victim");
        assert!(headers.get(SET_COOKIE).is_some());
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path(), None));

        let (status, _, body) = send(&app, chat_request("   ", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let v: Value = serde_json::from_slice(&body).unwrap();
        assert!(v["error"].is_string());
    }

    #[tokio::test]
    async fn test_reset_clears_history_and_rotates_session() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path(), Some(std::sync::Arc::new(EchoGenerator)));
        let app = build_router(state.clone());

        let (_, headers, body) = send(&app, chat_request("hello there", None)).await;
        let v: Value = serde_json::from_slice(&body).unwrap();
        let old_id = v["session_id"].as_str().unwrap().to_string();
        let cookie = cookie_pair(&headers).unwrap();
        assert_eq!(state.responder.sessions().get(&old_id).unwrap().len(), 1);

        let request = Request::builder()
            .method("POST")
            .uri("/api/reset")
            .header(COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers.get(SET_COOKIE).is_some());

        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["status"], "success");
        assert!(v["message"].is_string());
        assert_ne!(v["session_id"].as_str().unwrap(), old_id);
        assert!(state.responder.sessions().get(&old_id).is_none());
    }

    #[tokio::test]
    async fn test_status() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path(), Some(std::sync::Arc::new(EchoGenerator))));

        let request = Request::builder().uri("/api/status").body(Body::empty()).unwrap();
        let (status, _, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["model_available"], true);
        assert_eq!(v["model"], "echo");
        assert_eq!(v["sessions"], 0);
    }
}
