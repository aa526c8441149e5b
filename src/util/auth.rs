//! Auth service: login/logout and authentication checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that interprets the bearer token. Two checks are
//! offered at different cost levels:
//!
//! - `is_authenticated` decodes the payload and enforces `exp`; used for
//!   initial load and guarded navigation.
//! - `check_auth_lite` only looks for a non-empty token; used by the idle
//!   monitor on every tick.
//!
//! ERROR HANDLING
//! ==============
//! Malformed and expired tokens are never surfaced to the user: both force a
//! logout and report `false`. Storage failure on login propagates to the
//! caller as a failed login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::time::Duration;

use crate::config::SessionConfig;
use crate::net::types::{Credentials, Role};
use crate::util::clock::now_millis;
use crate::util::cookies::CookieOptions;
use crate::util::credential_store::{CredentialStore, StoreError};
use crate::util::token::decode_claims;

/// Full-page navigation used by logout so no in-memory state survives.
pub trait Navigator: Send + Sync {
    fn hard_navigate(&self, path: &str);
}

/// Sets `window.location.href` in the browser; no-op elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("hard navigation to {path} skipped outside the browser");
        }
    }
}

/// Result of the cheap presence-only check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteStatus {
    pub is_authenticated: bool,
    /// Stored role, if one is present and recognized.
    pub role: Option<Role>,
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    config: Arc<SessionConfig>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>, config: SessionConfig) -> Self {
        Self { store, navigator, config: Arc::new(config) }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Persist `credentials` with the standard retention and transport flags.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the credential store cannot be written.
    pub fn login(&self, credentials: &Credentials) -> Result<(), StoreError> {
        self.store.save(credentials, &CookieOptions::login(self.config.retention))?;
        log::info!("session stored for {} ({})", credentials.username, credentials.role);
        Ok(())
    }

    /// Persist `credentials` with an explicit expiry and no transport flags.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the credential store cannot be written.
    pub fn remember(&self, credentials: &Credentials, expiry: Duration) -> Result<(), StoreError> {
        self.store.save(credentials, &CookieOptions::remember_me(expiry))?;
        log::info!("session remembered for {} ({}s)", credentials.username, expiry.as_secs());
        Ok(())
    }

    /// Clear stored credentials without navigating.
    pub fn forget(&self) {
        self.store.clear();
    }

    /// Clear stored credentials, then hard-navigate to the login page.
    pub fn logout(&self) {
        self.store.clear();
        log::info!("logged out");
        self.navigator.hard_navigate(&self.config.login_path);
    }

    /// Complete stored session, if any.
    #[must_use]
    pub fn stored_session(&self) -> Option<Credentials> {
        self.store.read().into_credentials()
    }

    /// Raw stored token, if a non-empty one is present. Not decoded.
    #[must_use]
    pub fn stored_token(&self) -> Option<String> {
        self.store.read().token.filter(|t| !t.is_empty())
    }

    /// Strict check against the current wall clock.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(now_millis())
    }

    /// Strict check: decode the token and enforce `exp` at `now_ms`.
    ///
    /// Fails closed; malformed or expired tokens trigger `logout`.
    pub fn is_authenticated_at(&self, now_ms: f64) -> bool {
        let Some(token) = self.stored_token() else {
            return false;
        };
        match decode_claims(&token) {
            Ok(claims) if claims.is_expired_at(now_ms) => {
                log::info!("stored token expired");
                self.logout();
                false
            }
            Ok(_) => true,
            Err(e) => {
                log::warn!("discarding malformed token: {e}");
                self.logout();
                false
            }
        }
    }

    /// Presence-only check: a non-empty stored token is enough.
    pub fn check_auth_lite(&self) -> LiteStatus {
        let fields = self.store.read();
        let is_authenticated = fields.has_token();
        let role = if is_authenticated { fields.role.and_then(|r| r.parse().ok()) } else { None };
        LiteStatus { is_authenticated, role }
    }
}
