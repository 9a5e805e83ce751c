//! Subcommand implementations.

pub mod auth;
pub mod follow;
pub mod games;
pub mod reviews;
pub mod validate;

use thiserror::Error;

use playlog_client::{ClientConfig, ConfigError, PlayLogClient};
use playlog_core::ReviewId;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The input failed a local check.
    #[error("{0}")]
    Invalid(String),

    /// The command needs a logged-in user.
    #[error("This command needs --user")]
    NotLoggedIn,

    /// The action is not available to this user.
    #[error("{0} is not available for this user")]
    NotPermitted(&'static str),

    /// No recent review has this ID.
    #[error("Review {0} not found among recent reviews")]
    ReviewNotFound(ReviewId),

    /// The request was sent and did not succeed.
    #[error("{0}")]
    Failed(String),

    /// Client configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP client error.
    #[error(transparent)]
    Client(#[from] playlog_client::ClientError),
}

/// Build a client from the environment.
fn connect() -> Result<PlayLogClient, CommandError> {
    let config = ClientConfig::from_env()?;
    tracing::debug!(api_url = %config.api_url, "Using PlayLog API");
    Ok(PlayLogClient::new(&config)?)
}
