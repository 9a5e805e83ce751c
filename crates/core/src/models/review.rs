//! Review records as returned by the PlayLog API.

use serde::{Deserialize, Serialize};

use crate::types::{GameSlug, Rating, ReviewId};

/// A user-authored rating and text attached to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Username of the author. Not re-validated: accounts created before
    /// the current username rules still own reviews.
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_slug: Option<GameSlug>,
    pub rating: Rating,
    #[serde(default)]
    pub text: String,
    /// Like count as last reported by the server.
    #[serde(rename = "likes", alias = "likeCount", default)]
    pub like_count: i64,
}

impl Review {
    /// Whether `username` wrote this review.
    #[must_use]
    pub fn is_authored_by(&self, username: &str) -> bool {
        self.user == username
    }
}

/// Response body of `recent-reviews`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewList {
    #[serde(default)]
    pub reviews: Vec<Review>,
}
