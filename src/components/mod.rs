//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome around the screens. They read session
//! state through the injected handle and never mutate it directly; the only
//! state-changing call they issue is logout, which goes through the auth
//! operations.

pub mod nav_bar;
