//! Signed session cookie.
//!
//! The cookie carries `<uuid>.<sig>`, where `sig` is the hex of an
//! HMAC-SHA256 tag over the id keyed by the server secret, truncated to its
//! leftmost 16 bytes. Unsigned or tampered values are ignored and a fresh
//! session is issued.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;
use uuid::Uuid;

pub const COOKIE_NAME: &str = "haven_session";

type HmacSha256 = Hmac<Sha256>;

/// Bytes of the tag kept in the cookie.
const SIG_BYTES: usize = 16;

/// Session resolved for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub id: String,
    /// True if the id was just minted and the response must set the cookie.
    pub is_new: bool,
}

impl SessionCookie {
    /// Read the session from request headers, minting one if absent or invalid.
    pub fn resolve(headers: &HeaderMap, secret: &str) -> Self {
        match session_from_headers(headers, secret) {
            Some(id) => Self { id, is_new: false },
            None => Self::fresh(),
        }
    }

    /// A brand-new session.
    pub fn fresh() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            is_new: true,
        }
    }

    /// Response headers for this session: `Set-Cookie` when the id is new.
    pub fn response_headers(&self, secret: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.is_new {
            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                COOKIE_NAME,
                encode(secret, &self.id)
            );
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    headers.insert(SET_COOKIE, value);
                }
                Err(e) => warn!("Could not build session cookie: {}", e),
            }
        }
        headers
    }
}

fn keyed(secret: &str, id: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take any size");
    mac.update(id.as_bytes());
    mac
}

fn sign(secret: &str, id: &str) -> String {
    let tag = keyed(secret, id).finalize().into_bytes();
    hex::encode(&tag[..SIG_BYTES])
}

/// Cookie value for a session id.
pub fn encode(secret: &str, id: &str) -> String {
    format!("{}.{}", id, sign(secret, id))
}

/// Session id from a cookie value, if the signature checks out.
pub fn decode(secret: &str, value: &str) -> Option<String> {
    let (id, sig) = value.rsplit_once('.')?;
    if id.is_empty() || sig.len() != SIG_BYTES * 2 {
        return None;
    }
    let tag = hex::decode(sig).ok()?;
    keyed(secret, id).verify_truncated_left(&tag).ok()?;
    Some(id.to_string())
}

/// Find and verify the session cookie among the request's `Cookie` headers.
pub fn session_from_headers(headers: &HeaderMap, secret: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == COOKIE_NAME).then_some(value)
        })
        .find_map(|value| decode(secret, value))
}
