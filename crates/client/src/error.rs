//! Errors returned by the PlayLog HTTP client.

use thiserror::Error;

/// Message shown to users when a request failed for reasons they cannot fix.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors that can occur when talking to the PlayLog API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Endpoint path did not join onto the base URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// HTTP status of an API error, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) | Self::Url(_) => None,
        }
    }

    /// Whether the server answered with a non-success status.
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Text safe to show to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}
