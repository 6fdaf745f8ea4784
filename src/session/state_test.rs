use super::*;

fn actor() -> Actor {
    Actor {
        id: 1,
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        available: false,
        bio: None,
    }
}

// =============================================================================
// SessionState defaults
// =============================================================================

#[test]
fn default_state_is_restoring_with_no_actor() {
    let state = SessionState::default();
    assert!(state.actor.is_none());
    assert_eq!(state.phase, SessionPhase::Restoring);
    assert!(!state.is_ready());
}

// =============================================================================
// SessionState::restored
// =============================================================================

#[test]
fn restored_with_actor_is_ready() {
    let state = SessionState::restored(Some(actor()));
    assert!(state.is_ready());
    assert_eq!(state.actor, Some(actor()));
}

#[test]
fn restored_without_actor_is_ready_and_absent() {
    let state = SessionState::restored(None);
    assert!(state.is_ready());
    assert!(state.actor.is_none());
}

#[test]
fn restored_is_idempotent_over_equal_actors() {
    assert_eq!(
        SessionState::restored(Some(actor())),
        SessionState::restored(Some(actor()))
    );
}
