//! View model behind a review card.
//!
//! A [`ReviewCard`] holds what the card displays and changes it locally once
//! a like, unlike, edit or delete request succeeds. Counts are never read
//! back from the server: a successful like adds one, a successful unlike
//! subtracts one.

use core::fmt;

use crate::models::{GameInfo, Review};
use crate::session::Session;
use crate::types::Rating;

/// Something a user can do from a review card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewAction {
    Like,
    Unlike,
    Edit,
    Delete,
    FetchGame,
}

impl ReviewAction {
    /// Message shown on the card when this action fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Like => "Failed to like the review",
            Self::Unlike => "Failed to unlike the review",
            Self::Edit => "Failed to edit the review",
            Self::Delete => "Failed to delete the review",
            Self::FetchGame => "Could not fetch the game",
        }
    }

    /// Returns the action name as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::FetchGame => "fetch_game",
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the like button points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Like,
    Unlike,
}

impl LikeToggle {
    /// The action pressing the button performs.
    #[must_use]
    pub const fn action(self) -> ReviewAction {
        match self {
            Self::Like => ReviewAction::Like,
            Self::Unlike => ReviewAction::Unlike,
        }
    }
}

/// Controls the card renders for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewControls {
    /// Like/unlike button, shown to logged-in users.
    pub like_toggle: Option<LikeToggle>,
    /// Edit button, shown to the author.
    pub can_edit: bool,
    /// Delete button, shown to the author.
    pub can_delete: bool,
}

impl ReviewControls {
    /// Whether `action` has a visible control.
    #[must_use]
    pub const fn exposes(&self, action: ReviewAction) -> bool {
        match action {
            ReviewAction::Like | ReviewAction::Unlike => self.like_toggle.is_some(),
            ReviewAction::Edit => self.can_edit,
            ReviewAction::Delete => self.can_delete,
            ReviewAction::FetchGame => true,
        }
    }
}

/// Local state of one review card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    review: Review,
    likes: i64,
    liked: bool,
    text: String,
    rating: Rating,
    editing: bool,
    draft: String,
    draft_rating: Rating,
    deleted: bool,
    error: String,
    game: Option<GameInfo>,
}

impl ReviewCard {
    /// Start a card from a review as fetched.
    #[must_use]
    pub fn new(review: Review) -> Self {
        Self {
            likes: review.like_count,
            liked: false,
            text: review.text.clone(),
            rating: review.rating,
            editing: false,
            draft: review.text.clone(),
            draft_rating: review.rating,
            deleted: false,
            error: String::new(),
            game: None,
            review,
        }
    }

    /// The review as originally fetched.
    #[must_use]
    pub const fn review(&self) -> &Review {
        &self.review
    }

    /// Like count shown on the card.
    #[must_use]
    pub const fn likes(&self) -> i64 {
        self.likes
    }

    /// Whether this session has liked the review from this card.
    #[must_use]
    pub const fn is_liked(&self) -> bool {
        self.liked
    }

    /// Review text shown on the card.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rating shown on the card.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Text in the edit box.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub const fn draft_rating(&self) -> Rating {
        self.draft_rating
    }

    /// Whether the review was deleted; a deleted card renders nothing.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Last failure message, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Game metadata, once fetched.
    #[must_use]
    pub const fn game(&self) -> Option<&GameInfo> {
        self.game.as_ref()
    }

    /// Controls rendered for `session`.
    ///
    /// Guests and anonymous visitors get no controls; only the author gets
    /// edit and delete.
    #[must_use]
    pub fn controls(&self, session: &Session) -> ReviewControls {
        if self.deleted || session.username().is_none() {
            return ReviewControls::default();
        }

        let is_author = session.is_author_of(&self.review);
        ReviewControls {
            like_toggle: Some(if self.liked {
                LikeToggle::Unlike
            } else {
                LikeToggle::Like
            }),
            can_edit: is_author,
            can_delete: is_author,
        }
    }

    /// Open or close the edit box. Opening starts the draft from the
    /// current text and rating.
    pub fn toggle_editing(&mut self) {
        if !self.editing {
            self.draft.clone_from(&self.text);
            self.draft_rating = self.rating;
        }
        self.editing = !self.editing;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub const fn set_draft_rating(&mut self, rating: Rating) {
        self.draft_rating = rating;
    }

    /// A like request succeeded.
    pub const fn record_like(&mut self) {
        self.likes += 1;
        self.liked = true;
    }

    /// An unlike request succeeded.
    pub const fn record_unlike(&mut self) {
        self.likes -= 1;
        self.liked = false;
    }

    /// An edit request succeeded: the draft becomes the displayed review.
    pub fn record_edit(&mut self) {
        self.text.clone_from(&self.draft);
        self.rating = self.draft_rating;
        self.editing = false;
    }

    /// A delete request succeeded.
    pub const fn record_delete(&mut self) {
        self.deleted = true;
    }

    /// Game metadata arrived.
    pub fn record_game(&mut self, game: GameInfo) {
        self.game = Some(game);
        self.error.clear();
    }

    /// `action` failed; everything but the error message stays as it was.
    pub fn record_failure(&mut self, action: ReviewAction) {
        self.error = action.failure_message().to_string();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }
}
