//! Shared fixtures for unit tests.

use std::sync::{Arc, Mutex, PoisonError};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::config::SessionConfig;
use crate::net::types::{Credentials, Role};
use crate::state::session::SessionContainer;
use crate::util::auth::{AuthService, Navigator};
use crate::util::credential_store::MemoryStore;

/// Records every hard navigation instead of touching a browser.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_navigate(&self, path: &str) {
        self.visits.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_owned());
    }
}

/// An auth service over a fresh in-memory store, plus handles to both fakes.
pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub auth: AuthService,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let auth = AuthService::new(store.clone(), navigator.clone(), SessionConfig::default());
        Self { store, navigator, auth }
    }

    pub fn container(&self) -> SessionContainer {
        SessionContainer::new(self.auth.clone())
    }
}

/// A three-part token whose payload is `claims_json`.
pub fn token_with_claims(claims_json: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(claims_json))
}

pub fn credentials(token: &str, role: Role, username: &str, email: &str) -> Credentials {
    Credentials { token: token.to_owned(), role, username: username.to_owned(), email: email.to_owned() }
}

pub fn alice() -> Credentials {
    credentials("t1", Role::Student, "alice", "a@x.com")
}
