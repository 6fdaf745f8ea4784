//! Authenticated portal landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default destination after sign-in. It renders inside the
//! route guard, so the session actor is present whenever it is shown; the
//! marketplace panels it hosts read the session and are otherwise
//! independent of the auth core.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::session::state::SessionHandle;

/// Portal dashboard — greeting plus the marketplace overview panels.
#[component]
pub fn DashboardPage(session: SessionHandle) -> impl IntoView {
    let greeting = move || {
        session
            .actor()
            .map_or_else(|| "Welcome".to_owned(), |actor| format!("Welcome, {}", actor.name))
    };

    view! {
        <div class="portal-page">
            <NavBar session=session/>

            <main class="dashboard">
                <h1>{greeting}</h1>

                <div class="dashboard__panels">
                    <section class="panel">
                        <h2>"Upcoming sessions"</h2>
                        <p class="panel__empty">"Nothing scheduled yet."</p>
                    </section>
                    <section class="panel">
                        <h2>"Messages"</h2>
                        <p class="panel__empty">"No new messages."</p>
                    </section>
                    <section class="panel">
                        <h2>"Activity"</h2>
                        <p class="panel__empty">"Recent bookings and reviews will appear here."</p>
                    </section>
                </div>
            </main>
        </div>
    }
}
