//! Root application component with routing and context providers.
//!
//! LIFECYCLE
//! =========
//! `App` builds the session context (cookie store, auth service,
//! container), hydrates it from cookies once running in the browser, and owns
//! the idle monitor for as long as it stays mounted.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::SessionConfig;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminDashboard, home::HomePage, login::LoginPage, not_found::NotFoundPage, student::StudentDashboard,
};
use crate::state::session::SessionContainer;
use crate::util::auth::{AuthService, BrowserNavigator};
use crate::util::credential_store::CookieStore;
use crate::util::idle_monitor::{BrowserScheduler, IdleMonitor};
use crate::util::route_guard::RequireRole;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SessionConfig::default();
    let interval = config.monitor_interval;
    let auth = AuthService::new(Arc::new(CookieStore), Arc::new(BrowserNavigator), config);
    let session = SessionContainer::new(auth);
    provide_context(session.clone());

    let monitor = StoredValue::new(IdleMonitor::new(BrowserScheduler, interval));

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        session.hydrate();
        session.revalidate();
        let session = session.clone();
        monitor.update_value(move |m| {
            m.start(session);
        });
    });
    on_cleanup(move || {
        monitor.update_value(IdleMonitor::stop);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/weld-quiz.css"/>
        <Title text="Weld Quiz"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("student")
                        view=|| view! { <RequireRole role=Role::Student><StudentDashboard/></RequireRole> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequireRole role=Role::Admin><AdminDashboard/></RequireRole> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
