//! Password-reset request page.
//!
//! The response message is the same whether or not an account exists for the
//! address, so the form never confirms account existence.

use leptos::prelude::*;

use crate::session::state::SessionHandle;
#[cfg(feature = "hydrate")]
use crate::util::forms;

/// Email form that requests a password-reset link for one portal namespace.
#[component]
pub fn ForgotPasswordPage(session: SessionHandle) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let ns = session.namespace();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let address = forms::normalize_email(&email.get());
            if !forms::is_plausible_email(&address) {
                message.set("Enter a valid email address.".to_owned());
                return;
            }
            busy.set(true);
            message.set(String::new());

            leptos::task::spawn_local(async move {
                match crate::net::api::request_password_reset(ns, &address).await {
                    Ok(()) => {
                        message.set(
                            "If that address has an account, a reset link is on its way."
                                .to_owned(),
                        );
                    }
                    Err(e) => {
                        message.set(e.to_string());
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
                <p class="auth-card__subtitle">"Reset your password"</p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>

                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>

                <div class="auth-links">
                    <a href=ns.login_path>"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
