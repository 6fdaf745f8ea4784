//! In-memory session context for one portal namespace.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionHandle` is the single source of truth screens read for "who is
//! logged in". One handle per namespace is created in `App` and passed to
//! screens by prop injection. Only the auth operations mutate it, and they
//! keep the persisted store in agreement: storage writes happen before the
//! context mutation they correspond to.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use leptos::prelude::*;

use crate::net::types::Actor;
use crate::session::namespace::Namespace;
use crate::session::store;

/// Whether the persisted store has been consulted yet this page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initialization has not completed; the actor value is not meaningful.
    #[default]
    Restoring,
    /// The store has been read; the actor value is authoritative.
    Ready,
}

/// Session context value: the current actor plus the restore phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub actor: Option<Actor>,
    pub phase: SessionPhase,
}

impl SessionState {
    /// State after the store has been consulted.
    pub fn restored(actor: Option<Actor>) -> Self {
        Self {
            actor,
            phase: SessionPhase::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }
}

/// Handle pairing a namespace with its reactive session state.
///
/// `Copy` so route closures and event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    ns: &'static Namespace,
    state: RwSignal<SessionState>,
}

impl SessionHandle {
    pub fn new(ns: &'static Namespace) -> Self {
        Self {
            ns,
            state: RwSignal::new(SessionState::default()),
        }
    }

    pub fn namespace(&self) -> &'static Namespace {
        self.ns
    }

    /// Restore the session from the persisted store.
    ///
    /// Runs in a client-side effect once per page load; idempotent, so a
    /// re-run after the first restore changes nothing. Malformed records are
    /// handled inside `store::load_actor` and never escape here.
    pub fn initialize(&self) {
        if self.state.get_untracked().is_ready() {
            return;
        }
        let restored = store::load_actor(&store::LocalStorage, self.ns);
        #[cfg(feature = "hydrate")]
        log::debug!(
            "{} session restored: {}",
            self.ns.name,
            if restored.is_some() { "actor present" } else { "no actor" }
        );
        self.state.set(SessionState::restored(restored));
    }

    /// Replace the current actor and mark the session ready.
    ///
    /// Never writes to storage: the caller is responsible for keeping the
    /// persisted record in agreement (login commits storage first; profile
    /// refreshes update a record storage already holds).
    pub fn set_actor(&self, actor: Option<Actor>) {
        self.state.set(SessionState::restored(actor));
    }

    /// Reactive read of the full session state.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Reactive read of the current actor. Never blocks, never performs I/O.
    pub fn actor(&self) -> Option<Actor> {
        self.state.get().actor
    }

    /// Non-reactive read for use inside async operations.
    pub fn actor_untracked(&self) -> Option<Actor> {
        self.state.get_untracked().actor
    }
}
