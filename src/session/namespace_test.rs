use super::*;

// =============================================================================
// is_public_path
// =============================================================================

#[test]
fn login_register_and_forgot_are_public() {
    assert!(COHUB.is_public_path("/cohub/login"));
    assert!(COHUB.is_public_path("/cohub/register"));
    assert!(COHUB.is_public_path("/cohub/forgot-password"));
}

#[test]
fn reset_password_with_token_segment_is_public() {
    assert!(COHUB.is_public_path("/cohub/reset-password/abc123"));
    assert!(STUDENT.is_public_path("/student/reset-password/xyz"));
}

#[test]
fn reset_password_without_token_is_not_public() {
    assert!(!COHUB.is_public_path("/cohub/reset-password/"));
    assert!(!COHUB.is_public_path("/cohub/reset-password"));
}

#[test]
fn protected_routes_are_not_public() {
    assert!(!COHUB.is_public_path("/cohub/dashboard"));
    assert!(!COHUB.is_public_path("/cohub/profile"));
    assert!(!STUDENT.is_public_path("/student/dashboard"));
}

#[test]
fn public_paths_do_not_cross_namespaces() {
    assert!(!COHUB.is_public_path("/student/login"));
    assert!(!STUDENT.is_public_path("/cohub/login"));
}

// =============================================================================
// Descriptor isolation
// =============================================================================

#[test]
fn storage_keys_are_distinct_per_namespace() {
    assert_ne!(COHUB.actor_key, STUDENT.actor_key);
    assert_ne!(COHUB.token_key, STUDENT.token_key);
    assert_ne!(COHUB.actor_key, COHUB.token_key);
    assert_ne!(STUDENT.actor_key, STUDENT.token_key);
}

#[test]
fn route_spaces_are_distinct_per_namespace() {
    assert_ne!(COHUB.login_path, STUDENT.login_path);
    assert_ne!(COHUB.landing_path, STUDENT.landing_path);
}
