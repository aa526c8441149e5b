//! Role-gated access to route subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page is wrapped in `RequireRole`. The decision is a pure
//! function of the session state so it can be tested without a router; the
//! component re-runs it whenever the session signal changes, which is how a
//! session cleared mid-visit (e.g. by the idle monitor) turns into a redirect.
//!
//! A role mismatch redirects to the not-found path rather than to login, so
//! the wrong role cannot tell a page exists. There is no separate
//! "forbidden" page.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::config::SessionConfig;
use crate::net::types::Role;
use crate::state::session::{SessionContainer, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToNotFound,
}

impl GuardOutcome {
    /// Destination for redirecting outcomes, `None` for `Allow`.
    #[must_use]
    pub fn redirect_path(self, config: &SessionConfig) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(&config.login_path),
            Self::RedirectToNotFound => Some(&config.not_found_path),
        }
    }
}

/// Decide whether `state` may see a route requiring `required`.
///
/// The login check always runs before the role check.
#[must_use]
pub fn evaluate_guard(state: &SessionState, required: Option<Role>) -> GuardOutcome {
    if state.token().is_none() {
        return GuardOutcome::RedirectToLogin;
    }
    match required {
        Some(role) if state.role() != Some(role) => GuardOutcome::RedirectToNotFound,
        _ => GuardOutcome::Allow,
    }
}

/// What `RequireRole` shows for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Browser storage has not been read yet.
    Pending,
    Children,
    Redirect(GuardOutcome),
}

/// Render decision for a guarded route. Nothing is decided before the
/// session has been hydrated from the store.
#[must_use]
pub fn guard_view(hydrated: bool, state: &SessionState, required: Option<Role>) -> GuardView {
    if !hydrated {
        return GuardView::Pending;
    }
    match evaluate_guard(state, required) {
        GuardOutcome::Allow => GuardView::Children,
        outcome => GuardView::Redirect(outcome),
    }
}

/// Body of the guard's mount effect: run the strict check the first time
/// the session is hydrated, then never again. Returns whether it has run.
fn mount_check(session: &SessionContainer, checked: Option<bool>) -> bool {
    if checked == Some(true) || !session.is_hydrated() {
        return checked.unwrap_or(false);
    }
    session.revalidate();
    true
}

/// Render `children` only for an authenticated session with `role` (any role
/// when omitted); otherwise redirect.
#[component]
pub fn RequireRole(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContainer>();
    let config = session.auth().config().clone();

    let strict = session.clone();
    Effect::new(move |checked: Option<bool>| mount_check(&strict, checked));

    let state = session.state();
    move || match guard_view(session.is_hydrated(), &state.get(), role) {
        GuardView::Pending => view! { <p class="route-guard__pending">"Loading..."</p> }.into_any(),
        GuardView::Children => children().into_any(),
        GuardView::Redirect(outcome) => {
            log::debug!("route guard: {outcome:?}");
            let path = outcome.redirect_path(&config).unwrap_or(&config.login_path).to_owned();
            view! { <Redirect path=path/> }.into_any()
        }
    }
}
