//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContainer` is provided via context by the root `App`. Route
//! guards and role-aware components read its signal; login and logout go
//! through it so the credential store and the in-memory state never drift
//! apart for longer than one idle-monitor interval.
//!
//! INVARIANTS
//! ==========
//! - Either all four session fields are present or none is.
//! - The store write completes before the signal changes, so a guard check
//!   right after login never sees state the store does not have.
//! - An authenticated session's role never changes in place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::net::types::{Credentials, Role};
use crate::util::auth::AuthService;
use crate::util::credential_store::StoreError;

/// The two states a session can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Authenticated,
    Anonymous,
}

/// Current identity, or `None` for an anonymous visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub credentials: Option<Credentials>,
}

impl SessionState {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.credentials.as_ref().map(|c| c.role)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.email.as_str())
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.credentials.is_some() { SessionPhase::Authenticated } else { SessionPhase::Anonymous }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("session role is {current}; log in again to act as {requested}")]
    RoleChanged { current: Role, requested: Role },
}

/// Reactive session state paired with its durable store.
#[derive(Clone)]
pub struct SessionContainer {
    state: RwSignal<SessionState>,
    hydrated: RwSignal<bool>,
    auth: AuthService,
}

impl SessionContainer {
    /// Create an anonymous container; call `hydrate` to load stored state.
    pub fn new(auth: AuthService) -> Self {
        Self { state: RwSignal::new(SessionState::default()), hydrated: RwSignal::new(false), auth }
    }

    /// `true` once `hydrate` has run. Guards render a placeholder until then,
    /// since the server-side render cannot see browser storage.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.get()
    }

    /// Signal for reactive reads in components.
    #[must_use]
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Untracked copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.with_untracked(SessionState::phase)
    }

    /// Load whatever complete session the store holds.
    pub fn hydrate(&self) {
        let credentials = self.auth.stored_session();
        if let Some(c) = &credentials {
            log::debug!("hydrated session for {}", c.username);
        }
        self.state.set(SessionState { credentials });
        self.hydrated.set(true);
    }

    /// Run the strict token check; clear the container if it fails.
    ///
    /// Returns the check's result.
    pub fn revalidate(&self) -> bool {
        let ok = self.auth.is_authenticated();
        if !ok && self.state.with_untracked(SessionState::is_authenticated) {
            self.state.set(SessionState::default());
        }
        ok
    }

    /// Store `credentials` with standard retention, then publish them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if persisting fails (state unchanged) or
    /// `SessionError::RoleChanged` if a different-role session is active.
    pub fn set_session(&self, credentials: Credentials) -> Result<(), SessionError> {
        self.check_role(&credentials)?;
        self.auth.login(&credentials)?;
        self.state.set(SessionState { credentials: Some(credentials) });
        Ok(())
    }

    /// Like `set_session`, but persisted with the "remember me" expiry.
    ///
    /// # Errors
    ///
    /// Same as `set_session`.
    pub fn remember_session(&self, credentials: Credentials, expiry: Duration) -> Result<(), SessionError> {
        self.check_role(&credentials)?;
        self.auth.remember(&credentials, expiry)?;
        self.state.set(SessionState { credentials: Some(credentials) });
        Ok(())
    }

    /// Clear the store, then reset every field to `None`.
    pub fn clear_session(&self) {
        self.auth.forget();
        self.state.set(SessionState::default());
    }

    /// Reset every field to `None` without touching the store.
    ///
    /// Used when the store now belongs to a different login, which must
    /// survive.
    pub fn discard(&self) {
        self.state.set(SessionState::default());
    }

    /// Clear the session and hard-navigate to the login page.
    pub fn logout(&self) {
        self.state.set(SessionState::default());
        self.auth.logout();
    }

    fn check_role(&self, credentials: &Credentials) -> Result<(), SessionError> {
        match self.state.with_untracked(SessionState::role) {
            Some(current) if current != credentials.role => {
                Err(SessionError::RoleChanged { current, requested: credentials.role })
            }
            _ => Ok(()),
        }
    }
}
