//! Identifiers for reviews and games.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(i64);

impl ReviewId {
    /// Create a new review ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ReviewId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ReviewId> for i64 {
    fn from(id: ReviewId) -> Self {
        id.0
    }
}

/// Error returned for an empty or malformed game slug.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid game slug: {0:?}")]
pub struct GameSlugError(String);

/// URL-safe game identifier such as `the-witcher-3-wild-hunt`.
///
/// Slugs are embedded in request paths, so `/`, `?`, `#` and whitespace are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameSlug(String);

impl GameSlug {
    /// Parse a slug.
    ///
    /// # Errors
    ///
    /// Returns [`GameSlugError`] for an empty slug or one containing path
    /// or query delimiters.
    pub fn parse(s: &str) -> Result<Self, GameSlugError> {
        if s.is_empty() || s.chars().any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace()) {
            return Err(GameSlugError(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for GameSlug {
    type Err = GameSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GameSlug {
    type Error = GameSlugError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<GameSlug> for String {
    fn from(slug: GameSlug) -> Self {
        slug.0
    }
}
