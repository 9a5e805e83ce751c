//! API records shared by every PlayLog front-end.

pub mod game;
pub mod review;

pub use game::{Game, GameInfo, GameList};
pub use review::{Review, ReviewList};
