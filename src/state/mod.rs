//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session is global; page-local state stays in page components as
//! plain signals.

pub mod session;
