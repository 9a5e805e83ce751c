//! Game records as returned by the PlayLog API.

use serde::{Deserialize, Serialize};

use crate::types::GameSlug;

/// A game as shown in carousels, search results and the game-of-the-day
/// banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// URL slug used to open the game page.
    pub game_slug: GameSlug,
    /// Display name.
    #[serde(rename = "gameLabel")]
    pub label: String,
    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Publisher, present on the game of the day.
    #[serde(
        rename = "publisherLabel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub publisher: Option<String>,
}

/// Full metadata for a single game page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    #[serde(default)]
    pub game_slug: Option<GameSlug>,
    #[serde(rename = "gameLabel", default)]
    pub label: String,
    #[serde(rename = "genreLabel", default)]
    pub genre: Option<String>,
    #[serde(rename = "publisherLabel", default)]
    pub publisher: Option<String>,
    #[serde(rename = "countryLabel", default)]
    pub country: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(rename = "screenwriterLabel", default)]
    pub screenwriter: Option<String>,
    #[serde(rename = "composerLabel", default)]
    pub composer: Option<String>,
    #[serde(rename = "platformLabel", default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(rename = "gameDescription", default)]
    pub description: Option<String>,
}

/// A list of games from `popular-games`, `new-games` or `search-game`.
///
/// Accepts both `{"games": [...]}` and the doubly nested
/// `{"games": {"games": [...]}}` that `new-games` returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GameListWire")]
pub struct GameList {
    pub games: Vec<Game>,
}

#[derive(Deserialize)]
struct GameListWire {
    games: GamesField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GamesField {
    Flat(Vec<Game>),
    Nested { games: Vec<Game> },
}

impl From<GameListWire> for GameList {
    fn from(wire: GameListWire) -> Self {
        let games = match wire.games {
            GamesField::Flat(games) | GamesField::Nested { games } => games,
        };
        Self { games }
    }
}

impl IntoIterator for GameList {
    type Item = Game;
    type IntoIter = std::vec::IntoIter<Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.into_iter()
    }
}
