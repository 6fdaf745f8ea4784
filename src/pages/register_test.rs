use super::*;

// =============================================================================
// validate_register_input
// =============================================================================

#[test]
fn validate_register_input_accepts_complete_form() {
    let form = validate_register_input(" Hub One ", "OP@Hub.com", "longenough", "longenough")
        .expect("valid input");
    assert_eq!(form.name, "Hub One");
    assert_eq!(form.email, "op@hub.com");
    assert_eq!(form.password, "longenough");
}

#[test]
fn validate_register_input_requires_name() {
    assert_eq!(
        validate_register_input("   ", "a@b.com", "longenough", "longenough"),
        Err("Enter a display name.")
    );
}

#[test]
fn validate_register_input_rejects_bad_email() {
    assert_eq!(
        validate_register_input("A", "nope", "longenough", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("A", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_register_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register_input("A", "a@b.com", "longenough", "different1"),
        Err("Passwords do not match.")
    );
}
