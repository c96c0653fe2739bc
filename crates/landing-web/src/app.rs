//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::LandingPage;
use crate::theme::Theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(Theme::default());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! {
                    <p class="not-found">"Page not found. " <A href="/">"Back home"</A></p>
                }>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}
