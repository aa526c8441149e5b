//! # weld-quiz
//!
//! Leptos + WASM client for the Weld Quiz e-learning platform.
//!
//! The core of the crate is the session model: a cookie-backed credential
//! store, an auth service that inspects bearer-token expiry, a reactive
//! session container, role-gated routes and an idle monitor that notices
//! credentials disappearing underneath the UI. Pages and components sit on
//! top of that core.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
