//! HTML routes: the chat page (with its form-post fallback) and static pages.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::error;

use crate::cookie::SessionCookie;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/about", get(about))
        .route("/resources", get(resources))
}

#[derive(Debug, Deserialize)]
struct MessageForm {
    #[serde(default)]
    message: String,
}

/// GET / — chat page; hands out a session cookie on first visit.
async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let secret = &state.config.secret_key;
    let session = SessionCookie::resolve(&headers, secret);
    let page = state.pages.chat(None, "");
    html(session.response_headers(secret), page)
}

/// POST / — form submission without JavaScript: reply, log, re-render.
async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<MessageForm>,
) -> Response {
    let secret = &state.config.secret_key;
    let session = SessionCookie::resolve(&headers, secret);

    let page = if form.message.trim().is_empty() {
        state.pages.chat(None, "")
    } else {
        let reply = state.converse(&session.id, &form.message).await;
        state.pages.chat(Some(&form.message), &reply.text)
    };

    html(session.response_headers(secret), page)
}

async fn about(State(state): State<Arc<AppState>>) -> Response {
    html(HeaderMap::new(), state.pages.about())
}

async fn resources(State(state): State<Arc<AppState>>) -> Response {
    html(HeaderMap::new(), state.pages.resources())
}

fn html(headers: HeaderMap, page: haven_core::Result<String>) -> Response {
    match page {
        Ok(body) => (headers, Html(body)).into_response(),
        Err(e) => {
            error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Page unavailable").into_response()
        }
    }
}
