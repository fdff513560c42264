//! HTTP helpers for the identity and messaging backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending cookies so
//! the backend session travels with every request.
//! Server-side (SSR): stubs returning errors since the session only
//! exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatTarget, User};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", crate::config::BACKEND_URL.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    match status {
        401 | 403 => "Email or password is incorrect.".to_owned(),
        429 => "Too many attempts. Try again shortly.".to_owned(),
        _ => format!("sign in failed: {status}"),
    }
}

/// Statuses that mean "no session", as opposed to "couldn't tell".
#[cfg(any(test, feature = "hydrate"))]
fn session_rejected(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(feature = "hydrate")]
fn get(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(&endpoint(path)).credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "hydrate")]
fn post(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::post(&endpoint(path)).credentials(web_sys::RequestCredentials::Include)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// `Ok(None)` means the backend answered that nobody is signed in (401/403).
///
/// # Errors
///
/// Returns a message on transport failure, any other non-success status, a
/// body that doesn't decode, or on the server. None of these say anything
/// about the session.
pub async fn fetch_current_user() -> Result<Option<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = get("/api/auth/me").send().await.map_err(|e| e.to_string())?;
        if session_rejected(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(format!("session lookup failed: {}", resp.status()));
        }
        resp.json::<User>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-facing message if the request fails or is rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = post("/api/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the signed-in user's conversations from `/api/chats`.
/// Returns `None` on failure or on the server.
pub async fn fetch_conversations() -> Option<Vec<ChatTarget>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = get("/api/chats").send().await.ok()?;
        if !resp.ok() {
            log::warn!("conversation list request failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<ChatTarget>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
