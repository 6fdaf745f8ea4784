//! Portal registration page.
//!
//! Registration never establishes a session: a successful submission shows
//! a confirmation and then sends the user to the sign-in page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::RegisterForm;
use crate::session::state::SessionHandle;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::forms;

#[cfg(any(test, feature = "hydrate"))]
fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterForm, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a display name.");
    }
    let email = forms::normalize_email(email);
    if !forms::is_plausible_email(&email) {
        return Err("Enter a valid email address.");
    }
    forms::validate_password_pair(password, confirm)?;
    Ok(RegisterForm {
        name: name.to_owned(),
        email,
        password: password.to_owned(),
    })
}

/// Registration form for one portal namespace.
#[component]
pub fn RegisterPage(session: SessionHandle) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let done = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let ns = session.namespace();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let form = match validate_register_input(
                &name.get(),
                &email.get(),
                &password.get(),
                &confirm.get(),
            ) {
                Ok(form) => form,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::session::ops::register(ns, form).await {
                    Ok(_) => {
                        done.set(true);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1200)).await;
                        navigate(ns.login_path, leptos_router::NavigateOptions::default());
                    }
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
                <p class="auth-card__subtitle">"Create an account"</p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Display name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>

                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || done.get()>
                    <p class="auth-message">"Account created. Taking you to sign in..."</p>
                </Show>

                <div class="auth-links">
                    <a href=ns.login_path>"Already have an account? Sign in"</a>
                </div>
            </div>
        </div>
    }
}
