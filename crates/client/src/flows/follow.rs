//! Follow button on a profile.

use tracing::{error, info, warn};

use playlog_core::Session;

use super::ActionOutcome;
use crate::client::PlayLogClient;
use crate::error::ClientError;

const FOLLOW_ERROR: &str = "Failed to follow the user";
const UNFOLLOW_ERROR: &str = "Failed to unfollow the user";
const FOLLOWING_ERROR: &str = "Could not fetch follow status";

/// Whether the session user follows `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowState {
    target: String,
    following: bool,
    error: String,
}

impl FollowState {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            following: false,
            error: String::new(),
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn is_following(&self) -> bool {
        self.following
    }

    /// Last failure message, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether the follow button is shown: logged in, and not on your own
    /// profile.
    #[must_use]
    pub fn can_follow(&self, session: &Session) -> bool {
        session
            .username()
            .is_some_and(|username| username != self.target)
    }

    /// Ask the server whether the session user follows the target.
    pub async fn refresh(&mut self, client: &PlayLogClient, session: &Session) -> ActionOutcome {
        let Some(follower) = self.follower(session) else {
            return ActionOutcome::Skipped;
        };
        match client.is_following(follower, &self.target).await {
            Ok(following) => {
                self.following = following;
                self.error.clear();
                ActionOutcome::Applied
            }
            Err(e) => self.fail(FOLLOWING_ERROR, &e),
        }
    }

    pub async fn follow(&mut self, client: &PlayLogClient, session: &Session) -> ActionOutcome {
        let Some(follower) = self.follower(session) else {
            return ActionOutcome::Skipped;
        };
        let result = client.follow_user(follower, &self.target).await;
        self.settle(result, true, FOLLOW_ERROR)
    }

    pub async fn unfollow(&mut self, client: &PlayLogClient, session: &Session) -> ActionOutcome {
        let Some(follower) = self.follower(session) else {
            return ActionOutcome::Skipped;
        };
        let result = client.unfollow_user(follower, &self.target).await;
        self.settle(result, false, UNFOLLOW_ERROR)
    }

    /// Press the button: follow or unfollow depending on the current state.
    pub async fn toggle(&mut self, client: &PlayLogClient, session: &Session) -> ActionOutcome {
        if self.following {
            self.unfollow(client, session).await
        } else {
            self.follow(client, session).await
        }
    }

    fn follower<'s>(&self, session: &'s Session) -> Option<&'s str> {
        if !self.can_follow(session) {
            info!(target_user = %self.target, "Follow not available for this session, skipping");
            return None;
        }
        session.username()
    }

    /// The state flips only when the server reports `success: true`.
    fn settle(
        &mut self,
        result: Result<bool, ClientError>,
        following: bool,
        message: &str,
    ) -> ActionOutcome {
        match result {
            Ok(true) => {
                self.following = following;
                self.error.clear();
                ActionOutcome::Applied
            }
            Ok(false) => {
                warn!(target_user = %self.target, "Server reported follow change as unsuccessful");
                self.error = message.to_string();
                ActionOutcome::Failed
            }
            Err(e) => self.fail(message, &e),
        }
    }

    fn fail(&mut self, message: &str, e: &ClientError) -> ActionOutcome {
        error!(target_user = %self.target, error = %e, "{message}");
        self.error = message.to_string();
        ActionOutcome::Failed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_can_follow() {
        let state = FollowState::new("gamer_01");
        assert!(state.can_follow(&Session::authenticated("someone_2", "s@cmpe.com")));
        assert!(!state.can_follow(&Session::authenticated("gamer_01", "g@cmpe.com")));
        assert!(!state.can_follow(&Session::guest()));
        assert!(!state.can_follow(&Session::Anonymous));
    }

    #[test]
    fn test_unsuccessful_response_keeps_state() {
        let mut state = FollowState::new("gamer_01");
        assert_eq!(state.settle(Ok(false), true, FOLLOW_ERROR), ActionOutcome::Failed);
        assert!(!state.is_following());
        assert_eq!(state.error(), "Failed to follow the user");

        assert_eq!(state.settle(Ok(true), true, FOLLOW_ERROR), ActionOutcome::Applied);
        assert!(state.is_following());
        assert!(state.error().is_empty());
    }

    #[tokio::test]
    async fn test_guest_follow_is_skipped() {
        let client = PlayLogClient::new(
            &crate::config::ClientConfig::new("http://127.0.0.1:1/").unwrap(),
        )
        .unwrap();
        let mut state = FollowState::new("gamer_01");
        assert_eq!(
            state.toggle(&client, &Session::guest()).await,
            ActionOutcome::Skipped
        );
        assert!(!state.is_following());
    }
}
