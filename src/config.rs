//! Client session configuration.
//!
//! DESIGN
//! ======
//! Paths, retention windows and the monitor cadence live in one value that
//! the root component provides through context, so tests can build isolated
//! configurations instead of reading globals.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Cookie retention for credentials written by a normal login.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Cookie retention for credentials written with "remember me" checked.
pub const DEFAULT_REMEMBER_ME: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// How often the idle monitor re-checks the credential store.
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub const LOGIN_PATH: &str = "/login";

/// Has no route; the router fallback renders the 404 page for it.
pub const NOT_FOUND_PATH: &str = "/not-found";

pub const API_BASE: &str = "/api";

/// Session-related settings shared by the auth service, guard and monitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub retention: Duration,
    pub remember_me: Duration,
    pub monitor_interval: Duration,
    pub login_path: String,
    pub not_found_path: String,
    pub api_base: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            retention: DEFAULT_RETENTION,
            remember_me: DEFAULT_REMEMBER_ME,
            monitor_interval: DEFAULT_MONITOR_INTERVAL,
            login_path: LOGIN_PATH.to_owned(),
            not_found_path: NOT_FOUND_PATH.to_owned(),
            api_base: API_BASE.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Join `path` onto the configured API base without doubling slashes.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
