//! Local signup rule checks. No network access.

use tracing::info;

use playlog_core::{validate_password, validate_username};

use super::CommandError;

/// Check a password.
///
/// # Errors
///
/// Returns `CommandError::Invalid` with the first rule the password breaks.
pub fn password(value: &str) -> Result<(), CommandError> {
    report(validate_password(value))
}

/// Check a username.
///
/// # Errors
///
/// Returns `CommandError::Invalid` with the first rule the username breaks.
pub fn username(value: &str) -> Result<(), CommandError> {
    report(validate_username(value))
}

fn report(message: String) -> Result<(), CommandError> {
    if message.is_empty() {
        info!("Valid");
        Ok(())
    } else {
        Err(CommandError::Invalid(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password() {
        assert!(password("abcdefgH1").is_ok());
        let err = password("abcdefgH").err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("Password must contain at least one digit.")
        );
    }

    #[test]
    fn test_username() {
        assert!(username("gamer_01").is_ok());
        assert!(matches!(username("abc"), Err(CommandError::Invalid(_))));
    }
}
