//! Login page: email + password with an optional "remember me".
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful `POST /login` goes through `SessionContainer`, which persists
//! the credentials before publishing them. The page then follows the session
//! signal to the role's landing route, which also covers visiting `/login`
//! while already signed in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::session::SessionContainer;

/// Trim and check the form fields before any network call.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'));
    if !valid_email {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContainer>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let state = session.state();
    Effect::new(move || {
        if let Some(role) = state.get().role() {
            navigate(role.home_path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let remember_me = remember.get_untracked();
            leptos::task::spawn_local(async move {
                let config = session.auth().config().clone();
                match crate::net::api::login(&config, &request).await {
                    Ok(credentials) => {
                        let stored = if remember_me {
                            session.remember_session(credentials, config.remember_me)
                        } else {
                            session.set_session(credentials)
                        };
                        match stored {
                            Ok(()) => info.set(String::new()),
                            Err(e) => info.set(format!("Could not save your session: {e}")),
                        }
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Weld Quiz"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
