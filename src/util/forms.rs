//! Shared input validation for the auth screens.
//!
//! Validation here is a UX courtesy only; the remote API revalidates
//! everything and its rejections surface as `Validation` errors.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Minimum accepted password length, matching the marketplace API.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and lowercase an email input.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Cheap plausibility check: one `@` with text on both sides.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Validate a new password against the length floor.
pub fn validate_new_password(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(())
}

/// Validate a password confirmation pair.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), &'static str> {
    validate_new_password(password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}
