//! Persisted session store over browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! One serialized actor record and one raw credential token per namespace,
//! surviving reloads. Only the auth operations and the self-healing purge in
//! `load_actor` write here; screens read session state through the context,
//! never the store directly.
//!
//! ERROR HANDLING
//! ==============
//! A record that fails to deserialize is treated as absent and purged rather
//! than surfaced: no call in this module panics or returns an error.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::net::types::Actor;
use crate::session::namespace::Namespace;

/// Raw string key/value storage the session record operations run against.
///
/// The browser implementation is [`LocalStorage`]; tests substitute an
/// in-memory double so record semantics are exercised natively.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed store. Degrades to absent/no-op when storage
/// is unavailable (SSR, denied storage access).
pub struct LocalStorage;

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Read and deserialize the persisted actor record for `ns`.
///
/// A malformed record is self-healing: both halves of the session record are
/// purged and `None` is returned.
pub fn load_actor(store: &dyn SessionStore, ns: &Namespace) -> Option<Actor> {
    let raw = store.get(ns.actor_key)?;
    match serde_json::from_str::<Actor>(&raw) {
        Ok(actor) => Some(actor),
        Err(_) => {
            #[cfg(feature = "hydrate")]
            log::warn!("purging malformed {} session record", ns.name);
            clear_session(store, ns);
            None
        }
    }
}

/// Persist a complete session record (actor + token) for `ns`.
///
/// Writes either both halves or, if the actor cannot be serialized, neither;
/// a partial pairing is never stored.
pub fn commit_session(store: &dyn SessionStore, ns: &Namespace, actor: &Actor, token: &str) {
    let Ok(raw) = serde_json::to_string(actor) else {
        return;
    };
    store.set(ns.actor_key, &raw);
    store.set(ns.token_key, token);
}

/// Refresh the persisted actor record in place, leaving the token untouched.
/// Used by profile updates that do not change the token.
pub fn save_actor(store: &dyn SessionStore, ns: &Namespace, actor: &Actor) {
    let Ok(raw) = serde_json::to_string(actor) else {
        return;
    };
    store.set(ns.actor_key, &raw);
}

/// Remove both halves of the session record for `ns`.
pub fn clear_session(store: &dyn SessionStore, ns: &Namespace) {
    store.remove(ns.actor_key);
    store.remove(ns.token_key);
}

/// Read the raw credential token for `ns`. An empty string counts as absent.
pub fn token(store: &dyn SessionStore, ns: &Namespace) -> Option<String> {
    store.get(ns.token_key).filter(|t| !t.is_empty())
}

/// Whether a non-empty credential token is persisted for `ns`.
pub fn has_token(store: &dyn SessionStore, ns: &Namespace) -> bool {
    token(store, ns).is_some()
}

/// In-memory store double for native unit tests.
#[cfg(test)]
pub(crate) struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: std::cell::RefCell::new(std::collections::HashMap::new()),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
