//! Wire DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the marketplace API payloads so serde round-trips stay
//! lossless. The credential token is deliberately NOT part of `Actor`: the
//! two are persisted under separate keys and paired only by the session
//! record operations.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated identity for one portal namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique account identifier.
    pub id: i64,
    /// Display name shown in portal chrome.
    pub name: String,
    /// Contact email; also the sign-in identifier.
    pub email: String,
    /// Namespace-specific status flag: accepting sessions (cohub) or
    /// actively booking (student).
    #[serde(default)]
    pub available: bool,
    /// Free-form profile blurb, if the account has one.
    #[serde(default)]
    pub bio: Option<String>,
}

/// Sign-in form payload for `POST /auth/{namespace}/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New-account payload for `POST /auth/{namespace}/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile fields editable from the portal profile screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub available: bool,
    pub bio: Option<String>,
}

/// Successful login payload: the actor plus an opaque credential token.
///
/// The client never inspects the token's structure; it only persists it and
/// checks for presence.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub actor: Actor,
    pub token: String,
}

/// Error payload shape returned by the remote API.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message, preferred when present.
    #[serde(default)]
    pub message: Option<String>,
    /// Short error code or fallback text.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best displayable message, preferring `message` over `error`.
    /// Empty strings count as absent.
    pub fn display_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.error.as_deref().filter(|m| !m.is_empty()))
    }
}
