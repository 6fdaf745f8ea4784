//! Route guard for protected portal screens.
//!
//! DESIGN
//! ======
//! The guard waits for session initialization instead of racing it: while
//! the context is still `Restoring` the outcome is `Pending` and nothing
//! renders, so an already-authenticated user is never bounced to login by a
//! guard that evaluated too early. Once the context is `Ready`, access
//! requires both the in-memory actor and a persisted credential token.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::namespace::Namespace;
use crate::session::state::{SessionHandle, SessionPhase};
use crate::session::store;

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session initialization has not completed; render nothing yet.
    Pending,
    /// Render the protected content.
    Authorized,
    /// Redirect to the namespace's login route. Terminal for this
    /// navigation attempt; the next protected navigation starts fresh.
    Denied,
}

/// Decide whether a navigation to `path` may proceed.
///
/// Public allowlisted paths are always authorized, whatever the session
/// state. Everything else requires a completed restore, a current actor,
/// and a persisted token.
pub fn evaluate(
    ns: &Namespace,
    phase: SessionPhase,
    actor_present: bool,
    token_present: bool,
    path: &str,
) -> GuardState {
    if ns.is_public_path(path) {
        return GuardState::Authorized;
    }
    match phase {
        SessionPhase::Restoring => GuardState::Pending,
        SessionPhase::Ready => {
            if actor_present && token_present {
                GuardState::Authorized
            } else {
                GuardState::Denied
            }
        }
    }
}

/// Gate protected children behind the namespace's session.
///
/// Renders children only while the guard is `Authorized`; on `Denied` it
/// navigates to the login route. No other side effects, never panics.
#[component]
pub fn RequireSession(session: SessionHandle, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let state = session.state();
        let token_present = store::has_token(&store::LocalStorage, session.namespace());
        evaluate(
            session.namespace(),
            state.phase,
            state.actor.is_some(),
            token_present,
            &location.pathname.get(),
        )
    });

    Effect::new(move || {
        if outcome.get() == GuardState::Denied {
            navigate(session.namespace().login_path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || outcome.get() == GuardState::Authorized>
            {children()}
        </Show>
    }
}
