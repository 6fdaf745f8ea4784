use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  User@Example.COM  "), "user@example.com");
}

#[test]
fn normalize_email_leaves_clean_input_unchanged() {
    assert_eq!(normalize_email("a@b.com"), "a@b.com");
}

// =============================================================================
// is_plausible_email
// =============================================================================

#[test]
fn plausible_email_accepts_ordinary_addresses() {
    assert!(is_plausible_email("a@b.com"));
    assert!(is_plausible_email("first.last@tutorhub.example"));
}

#[test]
fn plausible_email_rejects_missing_parts() {
    assert!(!is_plausible_email(""));
    assert!(!is_plausible_email("nodomain@"));
    assert!(!is_plausible_email("@nolocal.com"));
    assert!(!is_plausible_email("no-at-sign"));
}

#[test]
fn plausible_email_rejects_double_at() {
    assert!(!is_plausible_email("a@b@c.com"));
}

// =============================================================================
// password validation
// =============================================================================

#[test]
fn new_password_requires_minimum_length() {
    assert!(validate_new_password("1234567").is_err());
    assert!(validate_new_password("12345678").is_ok());
}

#[test]
fn password_pair_requires_matching_confirmation() {
    assert!(validate_password_pair("longenough", "longenough").is_ok());
    assert_eq!(
        validate_password_pair("longenough", "different1"),
        Err("Passwords do not match.")
    );
}

#[test]
fn password_pair_checks_length_before_match() {
    assert_eq!(
        validate_password_pair("short", "short"),
        Err("Password must be at least 8 characters.")
    );
}
