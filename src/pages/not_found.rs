//! Catch-all 404 page; also the destination for role mismatches.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}
