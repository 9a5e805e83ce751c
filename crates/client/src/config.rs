//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PLAYLOG_API_URL` - Base URL of the PlayLog API (e.g., `http://localhost:8000/`)
//!
//! ## Optional
//! - `PLAYLOG_HASH_PASSWORDS` - Send SHA-256 digests instead of passwords (default: false)
//! - `PLAYLOG_USER_AGENT` - `User-Agent` header (default: `playlog-client/<version>`)

use thiserror::Error;
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("playlog-client/", env!("CARGO_PKG_VERSION"));

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// PlayLog client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, always ending in `/` so endpoint paths join beneath it
    pub api_url: Url,
    /// Send `hashedPassword` (SHA-256 hex) instead of `password`
    pub hash_passwords: bool,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for `api_url` with every optional setting at its default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL does not parse or is
    /// not http(s).
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_base_url("PLAYLOG_API_URL", api_url)?,
            hash_passwords: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("PLAYLOG_API_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("PLAYLOG_API_URL".to_string()))?;
        let api_url = parse_base_url("PLAYLOG_API_URL", &raw_url)?;

        let hash_passwords = match lookup("PLAYLOG_HASH_PASSWORDS") {
            Some(value) => parse_bool("PLAYLOG_HASH_PASSWORDS", &value)?,
            None => false,
        };

        let user_agent = lookup("PLAYLOG_USER_AGENT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            api_url,
            hash_passwords,
            user_agent,
        })
    }

    /// Turn client-side password hashing on or off.
    #[must_use]
    pub fn with_hashed_passwords(mut self, enabled: bool) -> Self {
        self.hash_passwords = enabled;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an http(s) base URL and make sure its path ends with `/`.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Parse a boolean flag.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_url() {
        let result = ClientConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(key)) if key == "PLAYLOG_API_URL"));
    }

    #[test]
    fn test_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("PLAYLOG_API_URL", "http://localhost:8000")]))
                .unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
        assert!(!config.hash_passwords);
        assert!(config.user_agent.starts_with("playlog-client/"));
    }

    #[test]
    fn test_trailing_slash_added_to_path() {
        let config = ClientConfig::new("https://api.playlog.example/v1").unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.playlog.example/v1/");
        assert_eq!(
            config.api_url.join("like-review").unwrap().as_str(),
            "https://api.playlog.example/v1/like-review"
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://files.example.com/"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_hash_passwords_flag() {
        let on = ClientConfig::from_lookup(lookup(&[
            ("PLAYLOG_API_URL", "http://localhost:8000/"),
            ("PLAYLOG_HASH_PASSWORDS", "TRUE"),
        ]))
        .unwrap();
        assert!(on.hash_passwords);

        let bad = ClientConfig::from_lookup(lookup(&[
            ("PLAYLOG_API_URL", "http://localhost:8000/"),
            ("PLAYLOG_HASH_PASSWORDS", "sometimes"),
        ]));
        assert!(matches!(bad, Err(ConfigError::InvalidEnvVar(key, _)) if key == "PLAYLOG_HASH_PASSWORDS"));
    }

    #[test]
    fn test_custom_user_agent() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("PLAYLOG_API_URL", "http://localhost:8000/"),
            ("PLAYLOG_USER_AGENT", "playlog-mobile/2.1"),
        ]))
        .unwrap();
        assert_eq!(config.user_agent, "playlog-mobile/2.1");
    }

    #[test]
    fn test_with_hashed_passwords() {
        let config = ClientConfig::new("http://localhost:8000")
            .unwrap()
            .with_hashed_passwords(true);
        assert!(config.hash_passwords);
    }
}
