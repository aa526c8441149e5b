//! Top navigation bar with role-aware links.

use leptos::prelude::*;

use crate::state::session::SessionContainer;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContainer>();
    let state = session.state();

    let on_logout = move |_: leptos::ev::MouseEvent| session.logout();

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"Weld Quiz"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || state.get().is_authenticated()
                fallback=|| view! { <a class="nav-bar__link" href="/login">"Sign in"</a> }
            >
                <a class="nav-bar__link" href=move || state.get().role().map_or("/", |r| r.home_path())>
                    "Dashboard"
                </a>
                <span class="nav-bar__self">
                    {move || state.get().username().unwrap_or_default().to_owned()}
                    " ("
                    <span class="nav-bar__role">{move || state.get().role().map(|r| r.as_str()).unwrap_or_default()}</span>
                    ")"
                </span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
