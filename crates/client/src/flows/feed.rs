//! Home page feed.

use tracing::error;

use playlog_core::{Game, ReviewCard};

use crate::client::PlayLogClient;
use crate::error::ClientError;

const GAME_OF_THE_DAY_ERROR: &str = "Could not fetch Game Of The Day";
const POPULAR_GAMES_ERROR: &str = "Could not fetch Popular Games";
const NEW_GAMES_ERROR: &str = "Could not fetch New Games";
const RECENT_REVIEWS_ERROR: &str = "Could not fetch Recent Reviews";

/// One independently loaded part of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSection<T> {
    Loaded(T),
    Failed(&'static str),
}

impl<T> FeedSection<T> {
    fn from_result(section: &str, result: Result<T, ClientError>, message: &'static str) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => {
                error!(section = %section, error = %e, "Feed section failed to load");
                Self::Failed(message)
            }
        }
    }

    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub const fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Error message to show in place of the section.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(message) => Some(*message),
        }
    }
}

/// Everything the home page shows.
#[derive(Debug, Clone)]
pub struct HomeFeed {
    pub game_of_the_day: FeedSection<Game>,
    pub popular_games: FeedSection<Vec<Game>>,
    pub new_games: FeedSection<Vec<Game>>,
    pub recent_reviews: FeedSection<Vec<ReviewCard>>,
}

impl HomeFeed {
    /// Load all four sections concurrently. A failing section does not
    /// affect the others.
    pub async fn load(client: &PlayLogClient) -> Self {
        let (game_of_the_day, popular, new, recent) = tokio::join!(
            client.game_of_the_day(),
            client.popular_games(),
            client.new_games(),
            client.recent_reviews(),
        );

        Self {
            game_of_the_day: FeedSection::from_result(
                "game_of_the_day",
                game_of_the_day,
                GAME_OF_THE_DAY_ERROR,
            ),
            popular_games: FeedSection::from_result(
                "popular_games",
                popular.map(|list| list.games),
                POPULAR_GAMES_ERROR,
            ),
            new_games: FeedSection::from_result(
                "new_games",
                new.map(|list| list.games),
                NEW_GAMES_ERROR,
            ),
            recent_reviews: FeedSection::from_result(
                "recent_reviews",
                recent.map(|list| list.reviews.into_iter().map(ReviewCard::new).collect()),
                RECENT_REVIEWS_ERROR,
            ),
        }
    }

    /// Section errors in display order.
    #[must_use]
    pub fn errors(&self) -> Vec<&'static str> {
        [
            self.game_of_the_day.error(),
            self.popular_games.error(),
            self.new_games.error(),
            self.recent_reviews.error(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[tokio::test]
    async fn test_every_section_fails_independently() {
        let client =
            PlayLogClient::new(&ClientConfig::new("http://127.0.0.1:1/").unwrap()).unwrap();
        let feed = HomeFeed::load(&client).await;

        assert_eq!(
            feed.errors(),
            vec![
                "Could not fetch Game Of The Day",
                "Could not fetch Popular Games",
                "Could not fetch New Games",
                "Could not fetch Recent Reviews",
            ]
        );
        assert!(feed.recent_reviews.loaded().is_none());
    }

    #[test]
    fn test_section_accessors() {
        let mut loaded: FeedSection<Vec<u8>> = FeedSection::Loaded(vec![1]);
        assert_eq!(loaded.loaded(), Some(&vec![1]));
        assert_eq!(loaded.error(), None);
        loaded.loaded_mut().unwrap().push(2);
        assert_eq!(loaded.loaded().unwrap().len(), 2);

        let failed: FeedSection<Vec<u8>> = FeedSection::Failed(NEW_GAMES_ERROR);
        assert_eq!(failed.error(), Some("Could not fetch New Games"));
    }
}
