use super::*;

// =============================================================================
// validate_login_input
// =============================================================================

#[test]
fn validate_login_input_normalizes_email() {
    let credentials = validate_login_input("  A@B.com ", "secret-pw").expect("valid input");
    assert_eq!(credentials.email, "a@b.com");
    assert_eq!(credentials.password, "secret-pw");
}

#[test]
fn validate_login_input_rejects_implausible_email() {
    assert_eq!(
        validate_login_input("not-an-email", "secret-pw"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords are never trimmed or case-folded.
    let credentials = validate_login_input("a@b.com", "  Spaced Pw ").expect("valid input");
    assert_eq!(credentials.password, "  Spaced Pw ");
}
