//! Field rules for user input.
//!
//! Each function takes a raw value from a request body and returns the value
//! to store, or a 400 [`RestError`].

use validator::ValidateEmail;

use crate::error::RestError;

/// Status given to users created without one.
pub const STATUS_ACTIVE: &str = "active";

/// Trim and lower-case an email address, rejecting empty or malformed ones.
pub fn normalize_email(raw: &str) -> Result<String, RestError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() || !email.validate_email() {
        return Err(RestError::bad_request("invalid email address"));
    }
    Ok(email)
}

/// Names are free text; only surrounding whitespace is dropped.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// Passwords are required on create; surrounding whitespace is dropped.
pub fn normalize_password(raw: &str) -> Result<String, RestError> {
    let password = raw.trim();
    if password.is_empty() {
        return Err(RestError::bad_request("invalid password"));
    }
    Ok(password.to_string())
}

/// Empty status means the default, anything else is kept as sent.
pub fn status_or_default(raw: &str) -> String {
    let status = raw.trim();
    if status.is_empty() {
        STATUS_ACTIVE.to_string()
    } else {
        status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  John@X.com ").unwrap(), "john@x.com");
    }

    #[test]
    fn empty_email_is_bad_request() {
        let err = normalize_email("   ").unwrap_err();
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "invalid email address");
    }

    #[test]
    fn malformed_email_is_bad_request() {
        assert_matches!(normalize_email("not-an-email"), Err(RestError { status: 400, .. }));
    }

    #[test]
    fn password_required() {
        assert_matches!(normalize_password(""), Err(RestError { status: 400, .. }));
        assert_eq!(normalize_password(" secret ").unwrap(), "secret");
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(status_or_default(""), "active");
        assert_eq!(status_or_default("suspended"), "suspended");
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(normalize_name("  Doe "), "Doe");
    }
}
