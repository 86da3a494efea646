//! HTTP route handlers.

pub mod chat;
pub mod pages;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(pages::routes())
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().merge(chat::routes())
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{Body, Bytes};
    use axum::http::{HeaderMap, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Send one request through the router.
    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
        let res = app.clone().oneshot(request).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let body = res.into_body().collect().await.unwrap().to_bytes();
        (status, headers, body)
    }

    /// `name=value` part of the response's Set-Cookie header, ready to send back.
    pub fn cookie_pair(headers: &HeaderMap) -> Option<String> {
        headers
            .get(axum::http::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|s| s.to_string())
    }
}
