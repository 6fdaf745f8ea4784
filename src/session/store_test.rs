use super::*;
use crate::session::namespace::{COHUB, STUDENT};

fn actor() -> Actor {
    Actor {
        id: 1,
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        available: true,
        bio: None,
    }
}

// =============================================================================
// commit_session + load_actor round-trip
// =============================================================================

#[test]
fn committed_session_loads_back_identically() {
    let store = MemoryStore::new();
    commit_session(&store, &COHUB, &actor(), "tok123");

    assert_eq!(load_actor(&store, &COHUB), Some(actor()));
    assert_eq!(token(&store, &COHUB), Some("tok123".to_owned()));
}

#[test]
fn committed_session_survives_a_fresh_load() {
    // A second load from the same store simulates a page reload.
    let store = MemoryStore::new();
    commit_session(&store, &COHUB, &actor(), "tok123");

    let first = load_actor(&store, &COHUB);
    let second = load_actor(&store, &COHUB);
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn empty_store_loads_nothing() {
    let store = MemoryStore::new();
    assert_eq!(load_actor(&store, &COHUB), None);
    assert!(!has_token(&store, &COHUB));
}

// =============================================================================
// clear_session atomicity
// =============================================================================

#[test]
fn clear_session_removes_both_halves() {
    let store = MemoryStore::new();
    commit_session(&store, &COHUB, &actor(), "tok123");

    clear_session(&store, &COHUB);

    assert_eq!(load_actor(&store, &COHUB), None);
    assert_eq!(token(&store, &COHUB), None);
    assert_eq!(store.get(COHUB.actor_key), None);
    assert_eq!(store.get(COHUB.token_key), None);
}

#[test]
fn clear_session_on_empty_store_is_a_no_op() {
    let store = MemoryStore::new();
    clear_session(&store, &COHUB);
    assert_eq!(load_actor(&store, &COHUB), None);
}

// =============================================================================
// Malformed record self-healing
// =============================================================================

#[test]
fn malformed_actor_record_is_purged_without_panic() {
    let store = MemoryStore::new();
    commit_session(&store, &COHUB, &actor(), "tok123");
    store.set(COHUB.actor_key, "{not json");

    assert_eq!(load_actor(&store, &COHUB), None);
    // Both halves are gone, not just the broken one.
    assert_eq!(store.get(COHUB.actor_key), None);
    assert_eq!(store.get(COHUB.token_key), None);
}

#[test]
fn well_formed_json_of_the_wrong_shape_is_also_purged() {
    let store = MemoryStore::new();
    store.set(COHUB.actor_key, r#"{"unexpected":"shape"}"#);
    store.set(COHUB.token_key, "tok123");

    assert_eq!(load_actor(&store, &COHUB), None);
    assert_eq!(store.get(COHUB.token_key), None);
}

// =============================================================================
// Token reads
// =============================================================================

#[test]
fn empty_token_counts_as_absent() {
    let store = MemoryStore::new();
    store.set(COHUB.token_key, "");
    assert_eq!(token(&store, &COHUB), None);
    assert!(!has_token(&store, &COHUB));
}

// =============================================================================
// Namespace isolation
// =============================================================================

#[test]
fn sessions_do_not_leak_across_namespaces() {
    let store = MemoryStore::new();
    commit_session(&store, &COHUB, &actor(), "tok123");

    assert_eq!(load_actor(&store, &STUDENT), None);
    assert!(!has_token(&store, &STUDENT));
}

#[test]
fn clearing_one_namespace_leaves_the_other_intact() {
    let store = MemoryStore::new();
    commit_session(&store, &COHUB, &actor(), "cohub-tok");
    commit_session(&store, &STUDENT, &actor(), "student-tok");

    clear_session(&store, &COHUB);

    assert_eq!(load_actor(&store, &COHUB), None);
    assert_eq!(load_actor(&store, &STUDENT), Some(actor()));
    assert_eq!(token(&store, &STUDENT), Some("student-tok".to_owned()));
}
