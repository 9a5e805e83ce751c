//! Signup field validation as the forms consume it.
//!
//! The forms show one message per field and an empty string when the field
//! is fine, so these wrappers flatten the typed errors from
//! [`Username::check`] and [`Password::check`] into that shape.

use crate::types::{Email, Password, Username};

/// Check a password against the signup rules.
///
/// Returns `""` when valid, otherwise the message for the first failing rule.
///
/// ```
/// use playlog_core::validate_password;
///
/// assert_eq!(validate_password("abcdefgH1"), "");
/// assert_eq!(validate_password("short"), "Password must be at least 8 characters long.");
/// ```
#[must_use]
pub fn validate_password(password: &str) -> String {
    Password::check(password).err().map_or_else(String::new, |e| e.to_string())
}

/// Check a username against the signup rules.
///
/// Returns `""` when valid, otherwise the message for the first failing rule.
///
/// ```
/// use playlog_core::validate_username;
///
/// assert_eq!(validate_username("validUser_1"), "");
/// assert_eq!(validate_username("abc"), "Username must be at least 8 characters long.");
/// ```
#[must_use]
pub fn validate_username(username: &str) -> String {
    Username::check(username).err().map_or_else(String::new, |e| e.to_string())
}

/// Per-field messages for the signup form. Empty means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupErrors {
    /// Validate every field. All of them are checked so each field can show
    /// its own message.
    #[must_use]
    pub fn check(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: validate_username(username),
            email: Email::parse(email).err().map_or_else(String::new, |e| e.to_string()),
            password: validate_password(password),
        }
    }

    /// Whether the form may be submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}
