//! Game browsing commands.

use tracing::info;

use playlog_core::{Game, GameSlug};

use super::{CommandError, connect};

/// Show the game of the day.
///
/// # Errors
///
/// Returns error if the request fails.
pub async fn today() -> Result<(), CommandError> {
    let game = connect()?.game_of_the_day().await?;
    log_game(&game);
    Ok(())
}

/// List popular games.
///
/// # Errors
///
/// Returns error if the request fails.
pub async fn popular() -> Result<(), CommandError> {
    let list = connect()?.popular_games().await?;
    log_games("Popular games", &list.games);
    Ok(())
}

/// List new games.
///
/// # Errors
///
/// Returns error if the request fails.
pub async fn new() -> Result<(), CommandError> {
    let list = connect()?.new_games().await?;
    log_games("New games", &list.games);
    Ok(())
}

/// Show metadata for one game.
///
/// # Errors
///
/// Returns error if the slug is malformed or the request fails.
pub async fn info(slug: &str) -> Result<(), CommandError> {
    let slug = GameSlug::parse(slug).map_err(|e| CommandError::Invalid(e.to_string()))?;
    let game = connect()?.game_info(&slug).await?;

    info!(
        label = %game.label,
        genre = game.genre.as_deref().unwrap_or("-"),
        publisher = game.publisher.as_deref().unwrap_or("-"),
        platform = game.platform.as_deref().unwrap_or("-"),
        released = game.publication_date.as_deref().unwrap_or("-"),
        "{slug}"
    );
    if let Some(description) = &game.description {
        info!("{description}");
    }
    Ok(())
}

/// Search games by name prefix.
///
/// # Errors
///
/// Returns error if the request fails.
pub async fn search(term: &str) -> Result<(), CommandError> {
    if term.trim().is_empty() {
        return Err(CommandError::Invalid("Search term cannot be empty".to_string()));
    }
    let list = connect()?.search_games(term).await?;
    log_games(&format!("Results for '{term}'"), &list.games);
    Ok(())
}

fn log_game(game: &Game) {
    info!(
        slug = %game.game_slug,
        publisher = game.publisher.as_deref().unwrap_or("-"),
        "{}",
        game.label
    );
}

fn log_games(heading: &str, games: &[Game]) {
    info!(count = games.len(), "{heading}");
    for game in games {
        log_game(game);
    }
}
