//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `types` defines the wire schema, and
//! `error` carries the user-facing failure taxonomy shared by screens.

pub mod api;
pub mod error;
pub mod types;
