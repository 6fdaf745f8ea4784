//! Tokenized password-reset page.
//!
//! The token arrives as the final route segment of the emailed link. The
//! page never touches session state: a successful reset sends the user to
//! sign in with the new password.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_params_map;

use crate::session::state::SessionHandle;

#[cfg(any(test, feature = "hydrate"))]
fn validate_reset_input(password: &str, confirm: &str) -> Result<String, &'static str> {
    crate::util::forms::validate_password_pair(password, confirm)?;
    Ok(password.to_owned())
}

/// New-password form reached from a reset link.
#[component]
pub fn ResetPasswordPage(session: SessionHandle) -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let ns = session.namespace();

    #[cfg(feature = "hydrate")]
    let params = use_params_map();
    #[cfg(feature = "hydrate")]
    let token = move || params.with(|p| p.get("token")).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let new_password = match validate_reset_input(&password.get(), &confirm.get()) {
                Ok(p) => p,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
            let reset_token = token();
            if reset_token.is_empty() {
                error.set("This reset link is incomplete. Request a new one.".to_owned());
                return;
            }
            busy.set(true);
            error.set(String::new());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(ns, &reset_token, &new_password).await {
                    Ok(()) => navigate(ns.login_path, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{ns.title}</h1>
                <p class="auth-card__subtitle">"Choose a new password"</p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Set password"
                    </button>
                </form>

                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>

                <div class="auth-links">
                    <a href=ns.forgot_password_path>"Request a new link"</a>
                </div>
            </div>
        </div>
    }
}
