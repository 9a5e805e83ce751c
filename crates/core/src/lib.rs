//! PlayLog Core - Shared types library.
//!
//! This crate holds everything the PlayLog front-ends share that does not
//! touch the network:
//! - `playlog-client` - HTTP client and form/feed controllers
//! - `playlog-cli` - Command-line driver
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for usernames, passwords, emails, ratings and IDs
//! - [`validation`] - Signup field checks returning the form's inline messages
//! - [`models`] - Game and review records as the API returns them
//! - [`session`] - The explicit "who is acting" context
//! - [`review_card`] - Review card view model with optimistic like/edit/delete state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod review_card;
pub mod session;
pub mod types;
pub mod validation;

pub use models::*;
pub use review_card::{LikeToggle, ReviewAction, ReviewCard, ReviewControls};
pub use session::Session;
pub use types::*;
pub use validation::{SignupErrors, validate_password, validate_username};
