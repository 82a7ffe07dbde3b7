//! Input validation rules
//!
//! Shape checks applied to request bodies and path parameters before they
//! reach the auth service or the post store. Every rule returns a
//! `SharedError::ValidationError` naming the offending field.

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::error::SharedError;

/// Minimum password length accepted at sign-up and sign-in
pub const MIN_PASSWORD_LEN: usize = 6;

/// Longest password bcrypt reads in full, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

lazy_static! {
    // Dot-separated local part (no leading, trailing or doubled dots) and a
    // domain with at least one label before an alphabetic TLD.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[a-z0-9_'+\-]+(\.[a-z0-9_'+\-]+)*@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$"
    )
    .expect("email pattern is valid");

    static ref ID_PARAM_REGEX: Regex = Regex::new(r"^\d+$").expect("id pattern is valid");
}

/// Check that `email` looks like a deliverable address
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "Invalid email address"))
    }
}

/// Check the password length rule
///
/// The minimum counts characters; the maximum counts UTF-8 bytes.
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Posts need a non-blank title
pub fn validate_title(title: &str) -> Result<(), SharedError> {
    if title.trim().is_empty() {
        return Err(SharedError::validation("title", "Title is required"));
    }
    Ok(())
}

/// Parse a post id path parameter
///
/// Only plain decimal digits are accepted (no sign, no whitespace), and the
/// value must fit in an `i64`.
pub fn parse_post_id(raw: &str) -> Result<i64, SharedError> {
    if !ID_PARAM_REGEX.is_match(raw) {
        return Err(SharedError::validation("id", "Post id must be a positive integer"));
    }
    raw.parse::<i64>()
        .map_err(|_| SharedError::validation("id", "Post id is out of range"))
}
