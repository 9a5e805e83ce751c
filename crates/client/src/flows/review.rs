//! Review card actions.

use tracing::{error, info};

use playlog_core::{GameSlug, Rating, ReviewAction, ReviewCard, Session};

use super::ActionOutcome;
use crate::client::PlayLogClient;
use crate::error::ClientError;

/// Drives like/unlike/edit/delete requests for review cards on behalf of a
/// session.
#[derive(Debug, Clone, Copy)]
pub struct ReviewActions<'a> {
    client: &'a PlayLogClient,
    session: &'a Session,
}

impl<'a> ReviewActions<'a> {
    #[must_use]
    pub const fn new(client: &'a PlayLogClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// Post a new review of `game` as the session user. Guests and
    /// anonymous visitors cannot post.
    pub async fn create(&self, game: &GameSlug, rating: Rating, text: &str) -> ActionOutcome {
        let Some(user) = self.session.username() else {
            info!(game = %game, "Only logged-in users can post reviews, skipping");
            return ActionOutcome::Skipped;
        };
        match self.client.create_review(game, rating, text, user).await {
            Ok(()) => ActionOutcome::Applied,
            Err(e) => {
                error!(game = %game, error = %e, "Could not create review");
                ActionOutcome::Failed
            }
        }
    }

    /// Like the review. Each success adds one to the card's count, even if
    /// the card was already liked.
    pub async fn like(&self, card: &mut ReviewCard) -> ActionOutcome {
        let Some(user) = self.acting_user(card, ReviewAction::Like) else {
            return ActionOutcome::Skipped;
        };
        let result = self.client.like_review(card.review().id, user).await;
        Self::settle(card, ReviewAction::Like, result, ReviewCard::record_like)
    }

    /// Remove the like. Each success subtracts one from the card's count.
    pub async fn unlike(&self, card: &mut ReviewCard) -> ActionOutcome {
        let Some(user) = self.acting_user(card, ReviewAction::Unlike) else {
            return ActionOutcome::Skipped;
        };
        let result = self.client.unlike_review(card.review().id, user).await;
        Self::settle(card, ReviewAction::Unlike, result, ReviewCard::record_unlike)
    }

    /// Press the like button: like or unlike depending on what it shows.
    pub async fn toggle_like(&self, card: &mut ReviewCard) -> ActionOutcome {
        match card.controls(self.session).like_toggle {
            Some(toggle) if toggle.action() == ReviewAction::Unlike => self.unlike(card).await,
            Some(_) => self.like(card).await,
            None => ActionOutcome::Skipped,
        }
    }

    /// Save the card's draft text and rating.
    pub async fn save_edit(&self, card: &mut ReviewCard) -> ActionOutcome {
        if self.acting_user(card, ReviewAction::Edit).is_none() {
            return ActionOutcome::Skipped;
        }
        let result = self
            .client
            .edit_review(card.review().id, card.draft_rating(), card.draft())
            .await;
        Self::settle(card, ReviewAction::Edit, result, ReviewCard::record_edit)
    }

    /// Delete the review.
    pub async fn delete(&self, card: &mut ReviewCard) -> ActionOutcome {
        if self.acting_user(card, ReviewAction::Delete).is_none() {
            return ActionOutcome::Skipped;
        }
        let result = self.client.delete_review(card.review().id).await;
        Self::settle(card, ReviewAction::Delete, result, ReviewCard::record_delete)
    }

    /// Fetch metadata for the reviewed game. Skipped when the review carries
    /// no game slug.
    pub async fn load_game(&self, card: &mut ReviewCard) -> ActionOutcome {
        let Some(slug) = card.review().game_slug.clone() else {
            return ActionOutcome::Skipped;
        };
        match self.client.game_info(&slug).await {
            Ok(game) => {
                card.record_game(game);
                ActionOutcome::Applied
            }
            Err(e) => {
                error!(slug = %slug, error = %e, "Could not fetch game for review card");
                card.record_failure(ReviewAction::FetchGame);
                ActionOutcome::Failed
            }
        }
    }

    /// Username to act as, when the card exposes `action` to this session.
    fn acting_user(&self, card: &ReviewCard, action: ReviewAction) -> Option<&'a str> {
        if !card.controls(self.session).exposes(action) {
            info!(
                review = %card.review().id,
                action = %action,
                "Action not available for this session, skipping"
            );
            return None;
        }
        self.session.username()
    }

    fn settle(
        card: &mut ReviewCard,
        action: ReviewAction,
        result: Result<(), ClientError>,
        apply: impl FnOnce(&mut ReviewCard),
    ) -> ActionOutcome {
        match result {
            Ok(()) => {
                apply(card);
                card.clear_error();
                ActionOutcome::Applied
            }
            Err(e) => {
                error!(
                    review = %card.review().id,
                    action = %action,
                    error = %e,
                    "Review action failed"
                );
                card.record_failure(action);
                ActionOutcome::Failed
            }
        }
    }
}
