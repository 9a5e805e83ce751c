//! PlayLog Client - HTTP client and view-model controllers.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven client configuration
//! - [`client`] - One method per PlayLog API endpoint
//! - [`error`] - Client error type
//! - [`flows`] - Controllers that drive a request and update view state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod error;
pub mod flows;

pub use client::{LoginResponse, PlayLogClient};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, GENERIC_ERROR_MESSAGE};
pub use flows::{
    ActionOutcome, FeedSection, FollowState, ForgotPasswordForm, ForgotPasswordOutcome, HomeFeed,
    LOGIN_FAILED_MESSAGE, LoginForm, LoginOutcome, RESET_USER_NOT_FOUND_MESSAGE, ReviewActions,
    SIGNUP_DUPLICATE_MESSAGE, SignupForm, SignupOutcome,
};
