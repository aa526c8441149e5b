//! Admin dashboard.

use leptos::prelude::*;

use crate::state::session::SessionContainer;

const ADMIN_SECTIONS: [&str; 4] = ["Quizzes", "Students", "Forum", "Feedback"];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<SessionContainer>();
    let state = session.state();

    view! {
        <div class="dashboard-page dashboard-page--admin">
            <h1>{move || format!("Admin: {}", state.get().username().unwrap_or_default())}</h1>
            <p class="dashboard-page__email">{move || state.get().email().unwrap_or_default().to_owned()}</p>
            <ul class="dashboard-page__sections">
                {ADMIN_SECTIONS
                    .into_iter()
                    .map(|label| view! { <li>{label}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
