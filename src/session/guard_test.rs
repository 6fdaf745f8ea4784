use super::*;
use crate::session::namespace::{COHUB, STUDENT};

const PROTECTED: &str = "/cohub/dashboard";

// =============================================================================
// evaluate: settle behavior
// =============================================================================

#[test]
fn restoring_phase_is_pending_on_protected_paths() {
    let outcome = evaluate(&COHUB, SessionPhase::Restoring, false, false, PROTECTED);
    assert_eq!(outcome, GuardState::Pending);
}

#[test]
fn restoring_phase_is_pending_even_with_actor_and_token() {
    // The restore has not finished, so the values are not yet authoritative.
    let outcome = evaluate(&COHUB, SessionPhase::Restoring, true, true, PROTECTED);
    assert_eq!(outcome, GuardState::Pending);
}

// =============================================================================
// evaluate: ready-phase matrix
// =============================================================================

#[test]
fn actor_and_token_present_is_authorized() {
    let outcome = evaluate(&COHUB, SessionPhase::Ready, true, true, PROTECTED);
    assert_eq!(outcome, GuardState::Authorized);
}

#[test]
fn no_actor_and_no_token_is_denied() {
    let outcome = evaluate(&COHUB, SessionPhase::Ready, false, false, PROTECTED);
    assert_eq!(outcome, GuardState::Denied);
}

#[test]
fn actor_without_token_is_denied() {
    let outcome = evaluate(&COHUB, SessionPhase::Ready, true, false, PROTECTED);
    assert_eq!(outcome, GuardState::Denied);
}

#[test]
fn token_without_actor_is_denied() {
    let outcome = evaluate(&COHUB, SessionPhase::Ready, false, true, PROTECTED);
    assert_eq!(outcome, GuardState::Denied);
}

// =============================================================================
// evaluate: public-path exemption
// =============================================================================

#[test]
fn public_paths_are_authorized_when_unauthenticated() {
    for path in [
        "/cohub/login",
        "/cohub/register",
        "/cohub/forgot-password",
        "/cohub/reset-password/tok123",
    ] {
        let outcome = evaluate(&COHUB, SessionPhase::Ready, false, false, path);
        assert_eq!(outcome, GuardState::Authorized, "path {path}");
    }
}

#[test]
fn public_paths_are_authorized_while_restoring() {
    let outcome = evaluate(&COHUB, SessionPhase::Restoring, false, false, "/cohub/login");
    assert_eq!(outcome, GuardState::Authorized);
}

#[test]
fn public_paths_are_authorized_when_authenticated() {
    let outcome = evaluate(&COHUB, SessionPhase::Ready, true, true, "/cohub/login");
    assert_eq!(outcome, GuardState::Authorized);
}

#[test]
fn another_namespaces_public_path_is_not_exempt() {
    let outcome = evaluate(&STUDENT, SessionPhase::Ready, false, false, "/cohub/login");
    assert_eq!(outcome, GuardState::Denied);
}
