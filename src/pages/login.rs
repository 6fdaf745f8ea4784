//! Portal sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Credentials;
use crate::session::state::SessionHandle;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::forms;

#[cfg(any(test, feature = "hydrate"))]
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = forms::normalize_email(email);
    if !forms::is_plausible_email(&email) {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(Credentials {
        email,
        password: password.to_owned(),
    })
}

/// Sign-in form for one portal namespace.
///
/// Disables its submit button while a login is in flight and surfaces
/// `AuthError` messages inline.
#[component]
pub fn LoginPage(session: SessionHandle) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let ns = session.namespace();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let credentials = match validate_login_input(&email.get(), &password.get()) {
                Ok(credentials) => credentials,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::session::ops::login(session, credentials, navigate).await {
                    error.set(e.to_string());
                    busy.set(false);
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{ns.title}</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>

                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>

                <div class="auth-links">
                    <a href=ns.forgot_password_path>"Forgot password?"</a>
                    <a href=ns.register_path>"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
