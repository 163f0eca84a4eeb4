//! Input validation utilities

use common::error::{ClientError, ClientResult};
use regex::Regex;
use std::sync::OnceLock;

/// Validate a required free-text field and return it trimmed
pub fn validate_required(
    field: &'static str,
    label: &str,
    value: &str,
    max_len: usize,
) -> ClientResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ClientError::validation(field, format!("{} is required", label)));
    }

    if value.chars().count() > max_len {
        return Err(ClientError::validation(
            field,
            format!("{} must be at most {} characters long", label, max_len),
        ));
    }

    Ok(value.to_string())
}

/// Validate username
pub fn validate_username(username: &str) -> ClientResult<()> {
    let fail = |message: &str| Err(ClientError::validation("username", message));

    if username.is_empty() {
        return fail("Username is required");
    }

    if username.len() < 3 {
        return fail("Username must be at least 3 characters long");
    }

    if username.len() > 32 {
        return fail("Username must be at most 32 characters long");
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

    if !regex.is_match(username) {
        return fail("Username can only contain letters, numbers, and underscores");
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> ClientResult<()> {
    let fail = |message: &str| Err(ClientError::validation("email", message));

    if email.is_empty() {
        return fail("Email is required");
    }

    if email.len() > 254 {
        return fail("Email must be at most 254 characters long");
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return fail("Invalid email format");
    }

    Ok(())
}

/// Validate a new account password
pub fn validate_password(password: &str) -> ClientResult<()> {
    let fail = |message: &str| Err(ClientError::validation("password", message));

    if password.is_empty() {
        return fail("Password is required");
    }

    if password.len() < 8 {
        return fail("Password must be at least 8 characters long");
    }

    if password.len() > 128 {
        return fail("Password must be at most 128 characters long");
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        }
    }

    if !has_upper {
        return fail("Password must contain at least one uppercase letter");
    }

    if !has_lower {
        return fail("Password must contain at least one lowercase letter");
    }

    if !has_digit {
        return fail("Password must contain at least one digit");
    }

    Ok(())
}

/// Validate a non-negative, finite amount
pub fn validate_non_negative(field: &'static str, label: &str, value: f64) -> ClientResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ClientError::validation(
            field,
            format!("{} must be a non-negative number", label),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: ClientResult<()>) -> String {
        result.unwrap_err().user_message()
    }

    #[test]
    fn test_validate_required_trims() {
        assert_eq!(
            validate_required("name", "Name", "  Lifts ", 100).unwrap(),
            "Lifts"
        );
        assert!(validate_required("name", "Name", "   ", 100).is_err());
        assert!(validate_required("name", "Name", "abcd", 3).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("rental_admin").is_ok());
        assert_eq!(
            message(validate_username("ab")),
            "Username must be at least 3 characters long"
        );
        assert!(validate_username("bad name").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ops@rent.example.com").is_ok());
        assert_eq!(message(validate_email("not-an-email")), "Invalid email format");
        assert_eq!(message(validate_email("")), "Email is required");
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Excavat0r").is_ok());
        assert!(validate_password("short1A").is_err());
        assert_eq!(
            message(validate_password("alllowercase1")),
            "Password must contain at least one uppercase letter"
        );
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("minRange", "Minimum range", 0.0).is_ok());
        assert!(validate_non_negative("minRange", "Minimum range", -1.0).is_err());
        assert!(validate_non_negative("minRange", "Minimum range", f64::NAN).is_err());
    }
}
