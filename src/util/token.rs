//! Bearer token payload inspection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens are three dot-separated segments whose middle segment is base64url
//! JSON. Only the `exp` claim is read, and the signature is never checked:
//! this is a UX shortcut for spotting expired sessions early, not an
//! authorization boundary. The server re-validates every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not a JSON claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims this client cares about.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    /// Expiry in Unix seconds; absent means the token never expires.
    #[serde(default)]
    pub exp: Option<f64>,
}

impl Claims {
    /// `true` once `now_ms` has reached `exp` (in milliseconds).
    #[must_use]
    pub fn is_expired_at(&self, now_ms: f64) -> bool {
        self.exp.is_some_and(|exp| now_ms >= exp * 1000.0)
    }
}

/// Decode the payload segment of `token` without verifying its signature.
///
/// # Errors
///
/// Returns a `TokenError` if the token does not have exactly three segments,
/// the payload is not base64, or the decoded bytes are not a claims object.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::Segments(segments.len()));
    };
    // Accept padded and standard-alphabet payloads as well as strict base64url.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    // Struct deserialization would also take a JSON array; insist on an object.
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&bytes)?;
    Ok(Claims::deserialize(serde_json::Value::Object(object))?)
}
