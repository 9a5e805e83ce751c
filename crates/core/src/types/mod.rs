//! Core types for PlayLog.
//!
//! Type-safe wrappers for the values a user types into a form or the API
//! hands back: usernames, passwords, emails, ratings and identifiers.

pub mod email;
pub mod id;
pub mod password;
pub mod rating;
pub mod username;

pub use email::{Email, EmailError};
pub use id::{GameSlug, GameSlugError, ReviewId};
pub use password::{PASSWORD_SPECIAL_CHARACTERS, Password, PasswordError, sha256_hex};
pub use rating::{Rating, RatingError};
pub use username::{Username, UsernameError};
