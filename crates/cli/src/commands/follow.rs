//! Follow commands. All of them act as `--user`.

use tracing::info;

use playlog_client::{ActionOutcome, FollowState};
use playlog_core::Session;

use super::{CommandError, connect};

/// Follow `target`.
///
/// # Errors
///
/// Returns error without `--user`, when following yourself, or if the
/// server reports failure.
pub async fn follow(session: &Session, target: String) -> Result<(), CommandError> {
    let mut state = ready(session, target)?;
    let outcome = state.follow(&connect()?, session).await;
    finish(&state, outcome, "Following")
}

/// Stop following `target`.
///
/// # Errors
///
/// Returns error without `--user`, when unfollowing yourself, or if the
/// server reports failure.
pub async fn unfollow(session: &Session, target: String) -> Result<(), CommandError> {
    let mut state = ready(session, target)?;
    let outcome = state.unfollow(&connect()?, session).await;
    finish(&state, outcome, "Unfollowed")
}

/// Report whether `--user` follows `target`.
///
/// # Errors
///
/// Returns error without `--user` or if the request fails.
pub async fn following(session: &Session, target: String) -> Result<(), CommandError> {
    let mut state = ready(session, target)?;
    let outcome = state.refresh(&connect()?, session).await;
    finish(
        &state,
        outcome,
        if state.is_following() {
            "Following"
        } else {
            "Not following"
        },
    )
}

fn ready(session: &Session, target: String) -> Result<FollowState, CommandError> {
    if session.username().is_none() {
        return Err(CommandError::NotLoggedIn);
    }
    let state = FollowState::new(target);
    if !state.can_follow(session) {
        return Err(CommandError::NotPermitted("Following yourself"));
    }
    Ok(state)
}

fn finish(state: &FollowState, outcome: ActionOutcome, done: &str) -> Result<(), CommandError> {
    match outcome {
        ActionOutcome::Applied => {
            info!(user = state.target(), "{done}");
            Ok(())
        }
        ActionOutcome::Failed => Err(CommandError::Failed(state.error().to_string())),
        ActionOutcome::Skipped => Err(CommandError::NotPermitted("Follow")),
    }
}
