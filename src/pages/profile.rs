//! Profile screen for the signed-in actor.
//!
//! Saving goes through `session::ops::update_profile`, which refreshes the
//! persisted record and the session context with the actor the API returns.
//! The credential token is never changed by this screen.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
#[cfg(feature = "hydrate")]
use crate::net::types::ProfileUpdate;
use crate::session::state::SessionHandle;

/// Profile editor — display name, availability, and bio.
#[component]
pub fn ProfilePage(session: SessionHandle) -> impl IntoView {
    // The guard guarantees an actor here; the defaults only cover the
    // instant before hydration completes.
    let current = session.actor_untracked().unwrap_or_default();
    let name = RwSignal::new(current.name);
    let available = RwSignal::new(current.available);
    let bio = RwSignal::new(current.bio.unwrap_or_default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let ns = session.namespace();

    let availability_label = match ns.name {
        "cohub" => "Accepting new students",
        _ => "Actively booking sessions",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let trimmed = name.get().trim().to_owned();
            if trimmed.is_empty() {
                message.set("Enter a display name.".to_owned());
                return;
            }
            let update = ProfileUpdate {
                name: trimmed,
                available: available.get(),
                bio: Some(bio.get()).filter(|b| !b.trim().is_empty()),
            };
            busy.set(true);
            message.set(String::new());

            leptos::task::spawn_local(async move {
                match crate::session::ops::update_profile(session, update).await {
                    Ok(_) => message.set("Saved.".to_owned()),
                    Err(e) => message.set(e.to_string()),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="portal-page">
            <NavBar session=session/>

            <main class="profile">
                <h1>"Your profile"</h1>

                <form class="profile-form" on:submit=on_submit>
                    <label class="profile-form__label">
                        "Display name"
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="profile-form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || available.get()
                            on:change=move |ev| available.set(event_target_checked(&ev))
                        />
                        {availability_label}
                    </label>

                    <label class="profile-form__label">
                        "Bio"
                        <textarea
                            class="auth-input profile-form__bio"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save changes"
                    </button>
                </form>

                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
            </main>
        </div>
    }
}
