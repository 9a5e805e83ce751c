//! Controllers sitting between the API client and a front-end.
//!
//! Each takes the [`PlayLogClient`](crate::PlayLogClient) and an explicit
//! [`Session`](playlog_core::Session), issues one request per user action and
//! writes the result into the view state it owns.

mod auth;
mod feed;
mod follow;
mod review;

pub use auth::{
    ForgotPasswordForm, ForgotPasswordOutcome, LOGIN_FAILED_MESSAGE, LoginForm, LoginOutcome,
    RESET_USER_NOT_FOUND_MESSAGE, SIGNUP_DUPLICATE_MESSAGE, SignupForm, SignupOutcome,
};
pub use feed::{FeedSection, HomeFeed};
pub use follow::FollowState;
pub use review::ReviewActions;

/// What a user action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The request succeeded and local state was updated.
    Applied,
    /// The request failed; the view carries an error message.
    Failed,
    /// The control is not exposed for this session, so nothing was sent.
    Skipped,
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
