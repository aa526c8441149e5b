//! `document.cookie` formatting, parsing and browser access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential store persists each session field as its own cookie. The
//! string handling is pure so it can be tested natively; only
//! `document_cookies` and `set_document_cookie` touch the browser.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::time::Duration;

/// Attributes applied when writing a cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    pub max_age: Duration,
    pub secure: bool,
    pub same_site_strict: bool,
}

impl CookieOptions {
    /// Options for credentials written by a normal login.
    #[must_use]
    pub fn login(retention: Duration) -> Self {
        Self { max_age: retention, secure: true, same_site_strict: true }
    }

    /// Options for "remember me" writes: explicit expiry, no transport flags.
    #[must_use]
    pub fn remember_me(expiry: Duration) -> Self {
        Self { max_age: expiry, secure: false, same_site_strict: false }
    }
}

/// Build a `document.cookie` assignment for `name=value` with `options`.
#[must_use]
pub fn format_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut out = format!(
        "{name}={}; Max-Age={}; Path=/",
        urlencoding::encode(value),
        options.max_age.as_secs()
    );
    if options.secure {
        out.push_str("; Secure");
    }
    if options.same_site_strict {
        out.push_str("; SameSite=Strict");
    }
    out
}

/// Build an assignment that deletes `name` immediately.
#[must_use]
pub fn format_expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/")
}

/// Look up `name` in a raw `document.cookie` string and percent-decode it.
///
/// Empty values are reported as absent.
#[must_use]
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name || value.is_empty() {
            return None;
        }
        Some(urlencoding::decode(value).map_or_else(|_| value.to_owned(), std::borrow::Cow::into_owned))
    })
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Read the raw `document.cookie` string. `None` outside the browser.
pub fn document_cookies() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        html_document()?.cookie().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Apply one `document.cookie` assignment.
///
/// # Errors
///
/// Returns an error string if there is no document or the browser rejects
/// the write (e.g. cookies disabled).
pub fn set_document_cookie(assignment: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = html_document().ok_or_else(|| "document unavailable".to_owned())?;
        doc.set_cookie(assignment).map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
        Err("document unavailable".to_owned())
    }
}
