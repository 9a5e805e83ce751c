//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
///
/// The `Display` text of each variant is the message shown inline under the
/// signup form's username field.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    /// Fewer than [`Username::MIN_LENGTH`] characters.
    #[error("Username must be at least {min} characters long.")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// More than [`Username::MAX_LENGTH`] characters.
    #[error("Username must be at most {max} characters long.")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Contains something other than ASCII letters, digits or `_`.
    #[error("Username must contain only letters, digits and underscore.")]
    InvalidCharacter,
}

/// A PlayLog username.
///
/// ## Constraints
///
/// Checked in this order, first failure wins:
///
/// - Length: at least 8 characters
/// - Length: at most 16 characters
/// - Characters: ASCII letters, digits and underscore only
///
/// ## Examples
///
/// ```
/// use playlog_core::Username;
///
/// assert!(Username::parse("gamer_01").is_ok());
/// assert!(Username::parse("validUser_1").is_ok());
///
/// assert!(Username::parse("abc").is_err());            // too short
/// assert!(Username::parse("gamer-one").is_err());      // hyphen
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Minimum number of characters.
    pub const MIN_LENGTH: usize = 8;

    /// Maximum number of characters.
    pub const MAX_LENGTH: usize = 16;

    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns the first rule the input violates.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        Self::check(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Run the username rules without allocating.
    ///
    /// # Errors
    ///
    /// Returns the first rule the input violates.
    pub fn check(s: &str) -> Result<(), UsernameError> {
        let len = s.chars().count();

        if len < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if len > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(())
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::check(&s)?;
        Ok(Self(s))
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Username::parse("gamer_01").is_ok());
        assert!(Username::parse("validUser_1").is_ok());
        assert!(Username::parse("ABCDEFGHIJKLMNOP").is_ok());
        // leading underscore/digit is allowed by these rules
        assert!(Username::parse("_leading1").is_ok());
        assert!(Username::parse("12345678").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            Username::parse("abc"),
            Err(UsernameError::TooShort { min: 8 })
        );
        assert_eq!(
            Username::parse("").unwrap_err().to_string(),
            "Username must be at least 8 characters long."
        );
    }

    #[test]
    fn test_too_long() {
        let err = Username::parse(&"a".repeat(17)).unwrap_err();
        assert_eq!(err, UsernameError::TooLong { max: 16 });
        assert_eq!(
            err.to_string(),
            "Username must be at most 16 characters long."
        );
    }

    #[test]
    fn test_invalid_character() {
        for bad in ["gamer-one", "gamer one", "gamer.one", "gamerçone"] {
            assert_eq!(
                Username::parse(bad),
                Err(UsernameError::InvalidCharacter),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_length_checked_before_charset() {
        // short and invalid: length wins
        assert!(matches!(
            Username::parse("a-b"),
            Err(UsernameError::TooShort { .. })
        ));
        // long and invalid: length wins
        assert!(matches!(
            Username::parse(&"a-".repeat(10)),
            Err(UsernameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        // 8 multi-byte chars: long enough, but rejected by the charset rule
        assert_eq!(
            Username::parse("éééééééé"),
            Err(UsernameError::InvalidCharacter)
        );
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let ok: Username = serde_json::from_str("\"gamer_01\"").unwrap();
        assert_eq!(ok.as_str(), "gamer_01");
        assert!(serde_json::from_str::<Username>("\"abc\"").is_err());
    }
}
