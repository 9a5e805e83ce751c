//! Review commands.
//!
//! Like, edit and delete act on a review from the recent feed, so the card
//! carries the author and current text the controls are computed from.

use tracing::info;

use playlog_client::{ActionOutcome, PlayLogClient, ReviewActions};
use playlog_core::{GameSlug, Rating, ReviewAction, ReviewCard, ReviewId, Session};

use super::{CommandError, connect};

/// List recent reviews with the controls available to the session.
///
/// # Errors
///
/// Returns error if the request fails.
pub async fn recent(session: &Session) -> Result<(), CommandError> {
    let reviews = connect()?.recent_reviews().await?;

    info!(count = reviews.reviews.len(), "Recent reviews");
    for review in reviews.reviews {
        let card = ReviewCard::new(review);
        let controls = card.controls(session);
        info!(
            id = %card.review().id,
            user = %card.review().user,
            rating = %card.rating(),
            likes = card.likes(),
            editable = controls.can_edit,
            "{}",
            card.text()
        );
    }
    Ok(())
}

/// Post a review.
///
/// # Errors
///
/// Returns error without `--user`, for a malformed slug or rating, or if
/// the request fails.
pub async fn create(
    session: &Session,
    game: &str,
    rating: i64,
    text: &str,
) -> Result<(), CommandError> {
    let game = GameSlug::parse(game).map_err(|e| CommandError::Invalid(e.to_string()))?;
    let rating = Rating::new(rating).map_err(|e| CommandError::Invalid(e.to_string()))?;

    let client = connect()?;
    match ReviewActions::new(&client, session)
        .create(&game, rating, text)
        .await
    {
        ActionOutcome::Applied => {
            info!(game = %game, "Review posted");
            Ok(())
        }
        ActionOutcome::Skipped => Err(CommandError::NotLoggedIn),
        ActionOutcome::Failed => Err(CommandError::Failed("Could not post the review".to_string())),
    }
}

/// Like a review.
///
/// # Errors
///
/// Returns error without `--user`, if the review is not in the recent feed,
/// or if the request fails.
pub async fn like(session: &Session, id: ReviewId) -> Result<(), CommandError> {
    let client = connect()?;
    let mut card = find_card(&client, id).await?;
    let outcome = ReviewActions::new(&client, session).like(&mut card).await;
    finish(&card, outcome, ReviewAction::Like)
}

/// Remove a like.
///
/// # Errors
///
/// Returns error without `--user`, if the review is not in the recent feed,
/// or if the request fails.
pub async fn unlike(session: &Session, id: ReviewId) -> Result<(), CommandError> {
    let client = connect()?;
    let mut card = find_card(&client, id).await?;
    let outcome = ReviewActions::new(&client, session).unlike(&mut card).await;
    finish(&card, outcome, ReviewAction::Unlike)
}

/// Replace the rating and text of your own review.
///
/// # Errors
///
/// Returns error when `--user` is not the author, if the rating is out of
/// range, or if the request fails.
pub async fn edit(
    session: &Session,
    id: ReviewId,
    rating: i64,
    text: String,
) -> Result<(), CommandError> {
    let rating = Rating::new(rating).map_err(|e| CommandError::Invalid(e.to_string()))?;

    let client = connect()?;
    let mut card = find_card(&client, id).await?;
    card.toggle_editing();
    card.set_draft(text);
    card.set_draft_rating(rating);

    let outcome = ReviewActions::new(&client, session)
        .save_edit(&mut card)
        .await;
    finish(&card, outcome, ReviewAction::Edit)
}

/// Delete your own review.
///
/// # Errors
///
/// Returns error when `--user` is not the author or if the request fails.
pub async fn delete(session: &Session, id: ReviewId) -> Result<(), CommandError> {
    let client = connect()?;
    let mut card = find_card(&client, id).await?;
    let outcome = ReviewActions::new(&client, session)
        .delete(&mut card)
        .await;
    finish(&card, outcome, ReviewAction::Delete)
}

async fn find_card(client: &PlayLogClient, id: ReviewId) -> Result<ReviewCard, CommandError> {
    client
        .recent_reviews()
        .await?
        .reviews
        .into_iter()
        .find(|review| review.id == id)
        .map(ReviewCard::new)
        .ok_or(CommandError::ReviewNotFound(id))
}

fn finish(
    card: &ReviewCard,
    outcome: ActionOutcome,
    action: ReviewAction,
) -> Result<(), CommandError> {
    match outcome {
        ActionOutcome::Applied => {
            info!(
                id = %card.review().id,
                likes = card.likes(),
                rating = %card.rating(),
                deleted = card.is_deleted(),
                "Review {action} done"
            );
            Ok(())
        }
        ActionOutcome::Failed => Err(CommandError::Failed(card.error().to_string())),
        ActionOutcome::Skipped => Err(CommandError::NotPermitted(match action {
            ReviewAction::Like | ReviewAction::Unlike => "Liking",
            ReviewAction::Edit => "Editing",
            ReviewAction::Delete => "Deleting",
            ReviewAction::FetchGame => "Fetching the game",
        })),
    }
}
