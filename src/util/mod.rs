//! Session plumbing and browser glue.
//!
//! Cookies, the wall clock, timers and hard navigation are only touched from
//! here. Each browser call sits behind a `hydrate` cfg split or a small
//! trait, so the session rules above it run unchanged in native tests.

pub mod auth;
pub mod clock;
pub mod cookies;
pub mod credential_store;
pub mod idle_monitor;
pub mod route_guard;
pub mod token;
