//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionContainer;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContainer>();
    let state = session.state();

    view! {
        <div class="home-page">
            <h1>"Weld Quiz"</h1>
            <p>"Practice welding theory with timed quizzes, discuss answers in the forum, and track your progress."</p>
            {move || match state.get().role() {
                Some(role) => view! {
                    <a class="btn btn--primary" href=role.home_path()>"Go to dashboard"</a>
                }.into_any(),
                None => view! {
                    <a class="btn btn--primary" href="/login">"Sign in"</a>
                }.into_any(),
            }}
        </div>
    }
}
