//! User-facing failure taxonomy for auth operations.
//!
//! ERROR HANDLING
//! ==============
//! Every variant's display text is safe to render inline on a form. Nothing
//! here is fatal: screens show the message and wait for user action.
//! Malformed persisted records are NOT represented — those are self-healed
//! inside the session store and never reach a screen.

use thiserror::Error;

/// Failure surfaced by an auth operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Credentials rejected by the remote API.
    #[error("{0}")]
    InvalidCredentials(String),
    /// Submitted form rejected as invalid.
    #[error("{0}")]
    Validation(String),
    /// Registration conflicts with an existing account.
    #[error("{0}")]
    Conflict(String),
    /// Transport failure or unexpected response; retryable by the user.
    #[error("{0}")]
    Network(String),
}
