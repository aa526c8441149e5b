//! Student dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only under `RequireRole role=Student`. Shows the session identity
//! immediately and fills in subscription details once `GET /users/me`
//! returns.

use leptos::prelude::*;

use crate::net::types::Profile;
use crate::state::session::SessionContainer;

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let session = expect_context::<SessionContainer>();
    let state = session.state();
    let profile = RwSignal::new(None::<Profile>);

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.snapshot().token().map(str::to_owned) {
            let config = session.auth().config().clone();
            leptos::task::spawn_local(async move {
                profile.set(crate::net::api::fetch_my_profile(&config, &token).await);
            });
        }
    }

    let subscription = move || match profile.get() {
        None => "Loading profile...",
        Some(p) if p.subscribed => "Subscription active: all quizzes unlocked.",
        Some(_) => "No active subscription: free quizzes only.",
    };

    view! {
        <div class="dashboard-page dashboard-page--student">
            <h1>{move || format!("Welcome, {}", state.get().username().unwrap_or_default())}</h1>
            <p class="dashboard-page__email">{move || state.get().email().unwrap_or_default().to_owned()}</p>
            <p class="dashboard-page__subscription">{subscription}</p>
            <Show when=move || profile.get().and_then(|p| p.member_since).is_some()>
                <p class="dashboard-page__since">
                    "Member since "
                    {move || profile.get().and_then(|p| p.member_since).unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
