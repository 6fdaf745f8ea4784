use super::*;

// =============================================================================
// validate_reset_input
// =============================================================================

#[test]
fn validate_reset_input_accepts_matching_pair() {
    assert_eq!(
        validate_reset_input("longenough", "longenough"),
        Ok("longenough".to_owned())
    );
}

#[test]
fn validate_reset_input_rejects_short_password() {
    assert_eq!(
        validate_reset_input("short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_reset_input_rejects_mismatch() {
    assert_eq!(
        validate_reset_input("longenough", "different1"),
        Err("Passwords do not match.")
    );
}
