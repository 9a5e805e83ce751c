//! Who is using the client.
//!
//! Components receive a [`Session`] explicitly instead of reading a global
//! "current user". The login flow produces one; logout replaces it.

use crate::models::Review;

/// The acting user of a front-end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody has logged in yet.
    #[default]
    Anonymous,
    /// Browsing without an account. Can read but not like or edit.
    Guest,
    /// Logged in.
    Authenticated {
        /// Username returned by the login endpoint.
        username: String,
        /// Email the user logged in with.
        email: String,
    },
}

impl Session {
    /// Build an authenticated session.
    #[must_use]
    pub fn authenticated(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::Authenticated {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Continue as guest.
    #[must_use]
    pub const fn guest() -> Self {
        Self::Guest
    }

    /// The session after logging out.
    #[must_use]
    pub fn logout(self) -> Self {
        Self::Anonymous
    }

    /// Username of the logged-in user, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username, .. } => Some(username),
            Self::Anonymous | Self::Guest => None,
        }
    }

    /// Whether someone is logged in or browsing as guest.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Whether the session user wrote `review`.
    #[must_use]
    pub fn is_author_of(&self, review: &Review) -> bool {
        self.username()
            .is_some_and(|username| review.is_authored_by(username))
    }

    /// Name to greet the user with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username().unwrap_or("Guest")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Rating, ReviewId};

    fn review_by(user: &str) -> Review {
        Review {
            id: ReviewId::new(1),
            user: user.to_string(),
            game_slug: None,
            rating: Rating::new(4).unwrap(),
            text: String::new(),
            like_count: 0,
        }
    }

    #[test]
    fn test_default_is_anonymous() {
        let session = Session::default();
        assert_eq!(session, Session::Anonymous);
        assert!(!session.is_logged_in());
        assert!(session.username().is_none());
    }

    #[test]
    fn test_guest_has_no_username() {
        let session = Session::guest();
        assert!(session.is_logged_in());
        assert!(session.username().is_none());
        assert_eq!(session.display_name(), "Guest");
        assert!(!session.is_author_of(&review_by("gamer_01")));
    }

    #[test]
    fn test_authenticated() {
        let session = Session::authenticated("gamer_01", "user@cmpe.com");
        assert_eq!(session.username(), Some("gamer_01"));
        assert_eq!(session.display_name(), "gamer_01");
        assert!(session.is_author_of(&review_by("gamer_01")));
        assert!(!session.is_author_of(&review_by("other_user")));
    }

    #[test]
    fn test_logout() {
        let session = Session::authenticated("gamer_01", "user@cmpe.com").logout();
        assert_eq!(session, Session::Anonymous);
    }
}
