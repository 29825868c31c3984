//! Input validation functions
//!
//! Validation happens before any store or hashing work, and the checks
//! run in a fixed order so clients always see the first failing
//! condition.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate login/registration credentials.
///
/// Order of checks: missing email, missing password, password too short.
/// "Missing" means empty after trimming whitespace.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if password.trim().is_empty() {
        return Err("Password is required".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Validate that a required text field is non-blank.
///
/// Returns the given message when the value is empty after trimming.
pub fn require_non_blank(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}
