//! Durable persistence of the four session fields.
//!
//! ARCHITECTURE
//! ============
//! `CredentialStore` is the seam between session logic and storage. The
//! browser build uses `CookieStore` (one cookie per field); tests and SSR use
//! `MemoryStore`, which honors the same expiry rules.
//!
//! INVARIANTS
//! ==========
//! `save` and `clear` always touch all four fields. `read` reports whatever
//! is present; `StoredFields::into_credentials` turns anything short of a
//! complete, well-formed tuple into "no session".

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::net::types::{Credentials, Role};
use crate::util::clock::now_millis;
use crate::util::cookies::{self, CookieOptions};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USERNAME_KEY: &str = "username";
pub const EMAIL_KEY: &str = "email";

/// Every key the store owns, in write order.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, ROLE_KEY, USERNAME_KEY, EMAIL_KEY];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("credential storage unavailable: {0}")]
    Unavailable(String),
}

/// Raw field values as found in storage; any subset may be present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredFields {
    pub token: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl StoredFields {
    /// `true` when a non-empty token is present.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Assemble a complete session, or `None` if any field is missing, the
    /// token is empty or the role is not recognized.
    #[must_use]
    pub fn into_credentials(self) -> Option<Credentials> {
        let token = self.token.filter(|t| !t.is_empty())?;
        let role = self.role?.parse::<Role>().ok()?;
        Some(Credentials { token, role, username: self.username?, email: self.email? })
    }
}

fn field_values(credentials: &Credentials) -> [(&'static str, &str); 4] {
    [
        (TOKEN_KEY, credentials.token.as_str()),
        (ROLE_KEY, credentials.role.as_str()),
        (USERNAME_KEY, credentials.username.as_str()),
        (EMAIL_KEY, credentials.email.as_str()),
    ]
}

/// Check that a cookie write actually landed by reading the token back.
///
/// Browsers drop cookie writes silently (cookies disabled, `Secure` on a
/// plain-HTTP origin), so a successful `document.cookie` assignment proves
/// nothing on its own.
fn confirm_token_written(raw: Option<&str>, token: &str) -> Result<(), StoreError> {
    let raw = raw.ok_or_else(|| StoreError::Unavailable("cookies unreadable".to_owned()))?;
    match cookies::find_cookie(raw, TOKEN_KEY) {
        Some(stored) if stored == token => Ok(()),
        Some(_) => Err(StoreError::Unavailable("token cookie write was not kept".to_owned())),
        None => Err(StoreError::Unavailable("browser dropped the token cookie".to_owned())),
    }
}

/// Whole-tuple persistence for session credentials.
pub trait CredentialStore: Send + Sync {
    /// Write all four fields with identical expiry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the backing storage cannot be
    /// written.
    fn save(&self, credentials: &Credentials, options: &CookieOptions) -> Result<(), StoreError>;

    /// Read whatever fields are currently present and unexpired.
    fn read(&self) -> StoredFields;

    /// Remove all four fields. Clearing an empty store is a no-op.
    fn clear(&self);
}

/// Browser cookie-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl CredentialStore for CookieStore {
    fn save(&self, credentials: &Credentials, options: &CookieOptions) -> Result<(), StoreError> {
        let written = field_values(credentials)
            .into_iter()
            .try_for_each(|(key, value)| cookies::set_document_cookie(&cookies::format_cookie(key, value, options)))
            .map_err(StoreError::Unavailable)
            .and_then(|()| confirm_token_written(cookies::document_cookies().as_deref(), &credentials.token));
        if written.is_err() {
            // Roll back so a failed login never leaves a partial tuple behind.
            self.clear();
        }
        written
    }

    fn read(&self) -> StoredFields {
        let Some(raw) = cookies::document_cookies() else {
            return StoredFields::default();
        };
        StoredFields {
            token: cookies::find_cookie(&raw, TOKEN_KEY),
            role: cookies::find_cookie(&raw, ROLE_KEY),
            username: cookies::find_cookie(&raw, USERNAME_KEY),
            email: cookies::find_cookie(&raw, EMAIL_KEY),
        }
    }

    fn clear(&self) {
        for key in SESSION_KEYS {
            if let Err(e) = cookies::set_document_cookie(&cookies::format_expired_cookie(key)) {
                log::debug!("cookie clear skipped for {key}: {e}");
            }
        }
    }
}

#[derive(Clone, Debug)]
struct MemoryEntry {
    value: String,
    expires_at_ms: f64,
}

/// In-process store used for SSR and tests.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Mutex<HashMap<&'static str, MemoryEntry>>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self { entries: Mutex::new(HashMap::new()), available: AtomicBool::new(true) }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `save` calls fail (or succeed again).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    /// Drop a single entry, as another tab or the user editing storage would.
    pub fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, MemoryEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_at(&self, now_ms: f64) -> StoredFields {
        let entries = self.lock();
        let get = |key: &str| {
            entries
                .get(key)
                .filter(|entry| entry.expires_at_ms > now_ms)
                .map(|entry| entry.value.clone())
        };
        StoredFields {
            token: get(TOKEN_KEY),
            role: get(ROLE_KEY),
            username: get(USERNAME_KEY),
            email: get(EMAIL_KEY),
        }
    }

    fn save_at(&self, credentials: &Credentials, options: &CookieOptions, now_ms: f64) -> Result<(), StoreError> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("memory store disabled".to_owned()));
        }
        #[allow(clippy::cast_precision_loss)]
        let expires_at_ms = now_ms + options.max_age.as_millis() as f64;
        let mut entries = self.lock();
        for (key, value) in field_values(credentials) {
            entries.insert(key, MemoryEntry { value: value.to_owned(), expires_at_ms });
        }
        Ok(())
    }
}

impl CredentialStore for MemoryStore {
    fn save(&self, credentials: &Credentials, options: &CookieOptions) -> Result<(), StoreError> {
        self.save_at(credentials, options, now_millis())
    }

    fn read(&self) -> StoredFields {
        self.read_at(now_millis())
    }

    fn clear(&self) {
        let mut entries = self.lock();
        for key in SESSION_KEYS {
            entries.remove(key);
        }
    }
}
