//! Password type and client-side password hashing.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// Special characters accepted in a password besides ASCII letters and digits.
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+.,";

/// Errors that can occur when parsing a [`Password`].
///
/// The `Display` text of each variant is the message shown inline under the
/// signup form's password field.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    /// Fewer than [`Password::MIN_LENGTH`] characters.
    #[error("Password must be at least {min} characters long.")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// More than [`Password::MAX_LENGTH`] characters.
    #[error("Password must be at most {max} characters long.")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// No ASCII digit.
    #[error("Password must contain at least one digit.")]
    MissingDigit,
    /// No ASCII lowercase letter.
    #[error("Password must contain at least one lowercase letter.")]
    MissingLowercase,
    /// No ASCII uppercase letter.
    #[error("Password must contain at least one uppercase letter.")]
    MissingUppercase,
    /// Contains a character outside letters, digits and the special set.
    #[error(
        "Password must contain only letters, digits, and the following special characters: !@#$%^&*()_+.,"
    )]
    InvalidCharacter,
}

/// A password that satisfies the signup rules.
///
/// The value is held in a [`SecretString`] and never appears in `Debug`
/// output.
///
/// ## Constraints
///
/// Checked in this order, first failure wins:
///
/// 1. at least 8 characters
/// 2. at most 32 characters
/// 3. at least one digit
/// 4. at least one lowercase letter
/// 5. at least one uppercase letter
/// 6. only letters, digits and `!@#$%^&*()_+.,`
#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    /// Minimum number of characters.
    pub const MIN_LENGTH: usize = 8;

    /// Maximum number of characters.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `Password` from a string.
    ///
    /// # Errors
    ///
    /// Returns the first rule the input violates.
    pub fn parse(s: &str) -> Result<Self, PasswordError> {
        Self::check(s)?;
        Ok(Self(SecretString::from(s.to_owned())))
    }

    /// Run the password rules without taking ownership of the input.
    ///
    /// # Errors
    ///
    /// Returns the first rule the input violates.
    pub fn check(s: &str) -> Result<(), PasswordError> {
        let len = s.chars().count();

        if len < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if len > Self::MAX_LENGTH {
            return Err(PasswordError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordError::MissingDigit);
        }
        if !s.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordError::MissingLowercase);
        }
        if !s.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordError::MissingUppercase);
        }
        if !s.chars().all(is_allowed_character) {
            return Err(PasswordError::InvalidCharacter);
        }

        Ok(())
    }

    /// Wrap a password without checking the signup rules.
    ///
    /// Login accepts whatever the account was created with, so the login
    /// form must not reject passwords that predate the current rules.
    #[must_use]
    pub fn unchecked(s: impl Into<String>) -> Self {
        Self(SecretString::from(s.into()))
    }

    /// Lowercase hex SHA-256 of the password, as sent by clients configured
    /// for client-side hashing.
    #[must_use]
    pub fn digest(&self) -> String {
        sha256_hex(self.0.expose_secret())
    }

    /// Expose the plaintext for transmission.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// Lowercase hex SHA-256 of an arbitrary string.
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

fn is_allowed_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARACTERS.contains(c)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Password::parse("abcdefgH1").is_ok());
        assert!(Password::parse("Passw0rd!@#$%^&*()_+.,").is_ok());
        assert!(Password::parse(&format!("Aa1{}", "x".repeat(29))).is_ok());
    }

    #[test]
    fn test_every_short_password_reports_length() {
        // Whatever else is wrong, short inputs always get the length message.
        for s in ["", "a", "A1", "abc!", "Ab1-", "ABCDEFG", "aB3$xY9"] {
            assert_eq!(
                Password::parse(s).unwrap_err(),
                PasswordError::TooShort { min: 8 },
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_length_counts_chars() {
        // Six chars even though the emoji take two UTF-16 units each.
        assert_eq!(
            Password::parse("Ab1\u{1F600}\u{1F600}\u{1F600}").unwrap_err(),
            PasswordError::TooShort { min: 8 }
        );
    }

    #[test]
    fn test_too_long() {
        let s = format!("Aa1{}", "x".repeat(30));
        assert_eq!(s.chars().count(), 33);
        assert_eq!(
            Password::parse(&s).unwrap_err(),
            PasswordError::TooLong { max: 32 }
        );
    }

    #[test]
    fn test_missing_digit() {
        for s in ["abcdefgH", "Password!", "NoDigitsHere.,"] {
            assert_eq!(
                Password::parse(s).unwrap_err(),
                PasswordError::MissingDigit,
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_missing_lowercase() {
        assert_eq!(
            Password::parse("ABCDEFG1").unwrap_err(),
            PasswordError::MissingLowercase
        );
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            Password::parse("abcdefg1").unwrap_err(),
            PasswordError::MissingUppercase
        );
    }

    #[test]
    fn test_invalid_character() {
        for s in ["abcdefH1-", "abc defH1", "abcdefH1?", "abcdéfH1"] {
            assert_eq!(
                Password::parse(s).unwrap_err(),
                PasswordError::InvalidCharacter,
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PasswordError::TooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters long."
        );
        assert_eq!(
            PasswordError::MissingUppercase.to_string(),
            "Password must contain at least one uppercase letter."
        );
        assert_eq!(
            PasswordError::InvalidCharacter.to_string(),
            "Password must contain only letters, digits, and the following special characters: !@#$%^&*()_+.,"
        );
    }

    #[test]
    fn test_digest_is_sha256_hex() {
        let password = Password::parse("abcdefgH1").unwrap();
        let digest = password.digest();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // sha256("abc")
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_debug_redacts() {
        let password = Password::parse("abcdefgH1").unwrap();
        let debug = format!("{password:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("abcdefgH1"));
    }

    #[test]
    fn test_unchecked_skips_rules() {
        let password = Password::unchecked("1234");
        assert_eq!(password.expose(), "1234");
    }
}
