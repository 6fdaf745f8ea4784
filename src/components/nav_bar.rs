//! Top bar for authenticated portal screens.

use leptos::prelude::*;

use crate::session::state::SessionHandle;

/// Portal navigation bar: title, actor identity, profile link, logout.
#[component]
pub fn NavBar(session: SessionHandle) -> impl IntoView {
    let ns = session.namespace();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let actor_name = move || {
        session
            .actor()
            .map(|actor| actor.name)
            .unwrap_or_else(|| "…".to_owned())
    };

    let available = move || session.actor().is_some_and(|actor| actor.available);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        crate::session::ops::logout(session, navigate.clone());
    };

    let profile_path = format!("/{}/profile", ns.name);

    view! {
        <header class="nav-bar">
            <a href=ns.landing_path class="nav-bar__title">
                "TutorHub"
            </a>
            <span class="nav-bar__portal">{ns.title}</span>

            <span class="nav-bar__spacer"></span>

            <Show when=available>
                <span class="nav-bar__availability">"Available"</span>
            </Show>

            <a href=profile_path.clone() class="nav-bar__profile" title="Edit profile">
                {actor_name}
            </a>

            <button class="btn nav-bar__logout" on:click=on_logout title="Sign out">
                "Sign out"
            </button>
        </header>
    }
}
