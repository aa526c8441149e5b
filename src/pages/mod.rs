//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`home`, `login`, `not_found`) render for anyone. Role pages
//! (`student`, `admin`) are mounted inside `RequireRole` by the router and can
//! assume a session is present.

pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod student;
