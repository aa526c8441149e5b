//! Calls to the Weld Quiz REST API: login and the current user's profile.
//!
//! Requests go out through `gloo-net` in the browser build. Native and SSR
//! builds compile stand-ins that fail immediately, because the session token
//! lives in browser cookies.
//!
//! ERROR HANDLING
//! ==============
//! `login` returns a message fit for the form. `fetch_my_profile` returns
//! `None` and logs any status the server rejects. A rejected login maps to
//! one generic message, so the form never says which of email or password
//! was wrong.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoginRequest, Profile};
use crate::config::SessionConfig;

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        400 | 401 | 403 => "Invalid email or password.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Exchange email + password for credentials via `POST /login`.
///
/// # Errors
///
/// Returns a user-facing error string if the request fails, the server
/// rejects the credentials, or the response body is not a full session.
pub async fn login(config: &SessionConfig, request: &LoginRequest) -> Result<Credentials, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint("login"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<Credentials>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in user's profile from `GET /users/me`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_my_profile(config: &SessionConfig, token: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint("users/me"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("profile fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        None
    }
}
