//! Auth operations: the only writers of session storage and context.
//!
//! ARCHITECTURE
//! ============
//! Every operation applies its effects in the same order: storage first,
//! context second, navigation last. Screens reading the context mid-flight
//! therefore never observe a context that is ahead of the persisted record.
//! Failures mutate nothing.
//!
//! Operations are not issued concurrently within one namespace (screens
//! disable their submit affordance while a call is in flight); a late
//! arrival after logout is last-writer-wins, and every writer stores a
//! complete record, never a partial one.

use leptos_router::NavigateOptions;

use crate::net::api;
use crate::net::error::AuthError;
use crate::net::types::{Actor, Credentials, ProfileUpdate, RegisterForm};
use crate::session::namespace::Namespace;
use crate::session::state::SessionHandle;
use crate::session::store;

/// Sign in and establish the namespace session.
///
/// On success the record is persisted, the context actor is set, and the
/// browser navigates to the namespace landing route.
///
/// # Errors
///
/// Propagates the API failure; neither storage nor context is touched.
pub async fn login<F>(
    session: SessionHandle,
    credentials: Credentials,
    navigate: F,
) -> Result<(), AuthError>
where
    F: Fn(&str, NavigateOptions),
{
    let ns = session.namespace();
    let response = api::login(ns, &credentials).await?;

    store::commit_session(&store::LocalStorage, ns, &response.actor, &response.token);
    session.set_actor(Some(response.actor));
    navigate(ns.landing_path, NavigateOptions::default());
    Ok(())
}

/// Create an account. Establishes no session: the caller directs the user
/// to the login flow on success.
///
/// # Errors
///
/// `Validation`, `Conflict`, or `Network` from the API.
pub async fn register(ns: &'static Namespace, form: RegisterForm) -> Result<Actor, AuthError> {
    let actor = api::register(ns, &form).await?;
    #[cfg(feature = "hydrate")]
    log::debug!("{} account registered for actor {}", ns.name, actor.id);
    Ok(actor)
}

/// End the namespace session: a pure local clear.
///
/// Storage is cleared, the context actor is dropped, and the browser
/// navigates to the login route. There is no server-side revocation call;
/// local state is the source of truth for the route guard.
pub fn logout<F>(session: SessionHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    let ns = session.namespace();
    store::clear_session(&store::LocalStorage, ns);
    session.set_actor(None);
    navigate(ns.login_path, NavigateOptions::default());
}

/// Update profile fields, refreshing the persisted record and the context
/// with the returned actor. The credential token is left untouched.
///
/// # Errors
///
/// `InvalidCredentials` when no token is persisted or the API rejects it;
/// otherwise the API failure. Nothing is mutated on failure.
pub async fn update_profile(
    session: SessionHandle,
    update: ProfileUpdate,
) -> Result<Actor, AuthError> {
    let ns = session.namespace();
    let token = store::token(&store::LocalStorage, ns).ok_or_else(|| {
        AuthError::InvalidCredentials("Your session has expired. Sign in again.".to_owned())
    })?;

    let actor = api::update_profile(ns, &token, &update).await?;

    store::save_actor(&store::LocalStorage, ns, &actor);
    session.set_actor(Some(actor.clone()));
    Ok(actor)
}
