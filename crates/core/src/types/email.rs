//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// The input is empty.
    #[error("E-mail cannot be empty.")]
    Empty,
    /// The input exceeds the RFC 5321 limit.
    #[error("E-mail must be at most {max} characters long.")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Contains whitespace.
    #[error("E-mail cannot contain spaces.")]
    Whitespace,
    /// No `@`, or more than one.
    #[error("E-mail must contain exactly one @ symbol.")]
    AtSymbol,
    /// Nothing before the `@`.
    #[error("E-mail is missing the part before the @ symbol.")]
    EmptyLocalPart,
    /// Domain missing or with an empty label.
    #[error("E-mail domain is not valid.")]
    InvalidDomain,
}

/// An email address, checked the way the signup form's e-mail input is.
///
/// ## Constraints
///
/// - Length: 1-254 characters
/// - Exactly one `@`
/// - Non-empty local part
/// - No whitespace
/// - Non-empty domain with no empty labels, so `user@localhost` passes
///
/// ```
/// use playlog_core::Email;
///
/// assert!(Email::parse("user@cmpe.com").is_ok());
/// assert!(Email::parse("user@localhost").is_ok());
/// assert!(Email::parse("user@cmpe..com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from a string. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::AtSymbol)?;
        if domain.contains('@') {
            return Err(EmailError::AtSymbol);
        }
        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }
        if domain.split('.').any(str::is_empty) {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
