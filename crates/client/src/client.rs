//! PlayLog API client.
//!
//! One method per endpoint. Paths are joined onto the configured base URL,
//! every request carries JSON headers, and the session cookie set by
//! `login` is replayed from the client's cookie store.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use playlog_core::{
    Email, Game, GameInfo, GameList, GameSlug, Password, Rating, ReviewId, ReviewList, Username,
};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for the PlayLog API.
#[derive(Clone)]
pub struct PlayLogClient {
    client: reqwest::Client,
    base_url: Url,
    hash_passwords: bool,
}

impl std::fmt::Debug for PlayLogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayLogClient")
            .field("base_url", &self.base_url.as_str())
            .field("hash_passwords", &self.hash_passwords)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Request / Response Types
// =============================================================================

/// Password as it goes over the wire: plain, or as a SHA-256 digest.
#[derive(Serialize)]
#[serde(untagged)]
enum PasswordField<'a> {
    Plain {
        password: &'a str,
    },
    Hashed {
        #[serde(rename = "hashedPassword")]
        hashed_password: String,
    },
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    #[serde(flatten)]
    password: PasswordField<'a>,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    username: &'a str,
    email: &'a str,
    #[serde(flatten)]
    password: PasswordField<'a>,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct CreateReviewRequest<'a> {
    game: &'a str,
    rating: Rating,
    text: &'a str,
    user: &'a str,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    game_name: &'a str,
}

#[derive(Serialize)]
struct LikeRequest<'a> {
    review: ReviewId,
    user: &'a str,
}

#[derive(Serialize)]
struct EditRequest<'a> {
    review: ReviewId,
    rating: Rating,
    text: &'a str,
}

#[derive(Serialize)]
struct DeleteRequest {
    review: ReviewId,
}

#[derive(Serialize)]
struct FollowRequest<'a> {
    follower: &'a str,
    followed: &'a str,
}

/// Body of a successful `login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Username of the account the email belongs to.
    pub username: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct ForgotPasswordResponse {
    #[serde(default, rename = "userNotFound")]
    user_not_found: bool,
}

#[derive(Deserialize)]
struct FollowResponse {
    #[serde(default)]
    success: bool,
}

#[derive(Deserialize)]
struct FollowingResponse {
    #[serde(default)]
    following: bool,
}

// =============================================================================
// Client
// =============================================================================

impl PlayLogClient {
    /// Create a new PlayLog API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            hash_passwords: config.hash_passwords,
        })
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether passwords are sent as SHA-256 digests.
    #[must_use]
    pub const fn hashes_passwords(&self) -> bool {
        self.hash_passwords
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in with an email and password.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` when the credentials are rejected.
    #[instrument(skip(self, email, password), fields(email = %email))]
    pub async fn login(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            email: email.as_str(),
            password: self.password_field(password),
        };
        let response: LoginResponse = self.post_json("login", &body).await?;
        debug!(username = %response.username, "Logged in");
        Ok(response)
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` when the server refuses the account, which
    /// it does for a duplicate username or email.
    #[instrument(skip(self, username, email, password), fields(username = %username, email = %email))]
    pub async fn signup(
        &self,
        username: &Username,
        email: &Email,
        password: &Password,
    ) -> Result<(), ClientError> {
        let body = SignupRequest {
            username: username.as_str(),
            email: email.as_str(),
            password: self.password_field(password),
        };
        self.post_status("signup", &body).await
    }

    /// Ask the server to send a password reset email.
    ///
    /// Returns `false` when no account has this email.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self, email), fields(email = %email))]
    pub async fn forgot_password(&self, email: &Email) -> Result<bool, ClientError> {
        let body = ForgotPasswordRequest {
            email: email.as_str(),
        };
        let response: ForgotPasswordResponse = self.post_json("forgot-password", &body).await?;
        Ok(!response.user_not_found)
    }

    // =========================================================================
    // Games
    // =========================================================================

    /// Fetch the featured game.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn game_of_the_day(&self) -> Result<Game, ClientError> {
        self.get_json("game-of-the-day").await
    }

    /// Fetch the most reviewed games.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn popular_games(&self) -> Result<GameList, ClientError> {
        self.get_json("popular-games").await
    }

    /// Fetch recently released games.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn new_games(&self) -> Result<GameList, ClientError> {
        self.get_json("new-games").await
    }

    /// Fetch full metadata for one game.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self, slug), fields(slug = %slug))]
    pub async fn game_info(&self, slug: &GameSlug) -> Result<GameInfo, ClientError> {
        let path = format!("game-info/{}/", slug.as_str());
        self.post_json(&path, &serde_json::json!({})).await
    }

    /// Search games whose name starts with `term`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn search_games(&self, term: &str) -> Result<GameList, ClientError> {
        self.post_json("search-game", &SearchRequest { game_name: term })
            .await
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Fetch the latest reviews.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn recent_reviews(&self) -> Result<ReviewList, ClientError> {
        self.post_json("recent-reviews", &serde_json::json!({})).await
    }

    /// Post a new review as `user`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server rejects it.
    #[instrument(skip(self, game, text), fields(game = %game))]
    pub async fn create_review(
        &self,
        game: &GameSlug,
        rating: Rating,
        text: &str,
        user: &str,
    ) -> Result<(), ClientError> {
        let body = CreateReviewRequest {
            game: game.as_str(),
            rating,
            text,
            user,
        };
        self.post_status("create-review", &body).await
    }

    /// Like a review on behalf of `user`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server rejects it.
    #[instrument(skip(self, review), fields(review = %review))]
    pub async fn like_review(&self, review: ReviewId, user: &str) -> Result<(), ClientError> {
        self.post_status("like-review", &LikeRequest { review, user })
            .await
    }

    /// Remove `user`'s like from a review.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server rejects it.
    #[instrument(skip(self, review), fields(review = %review))]
    pub async fn unlike_review(&self, review: ReviewId, user: &str) -> Result<(), ClientError> {
        self.post_status("unlike-review", &LikeRequest { review, user })
            .await
    }

    /// Replace a review's rating and text.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server rejects it.
    #[instrument(skip(self, review, text), fields(review = %review))]
    pub async fn edit_review(
        &self,
        review: ReviewId,
        rating: Rating,
        text: &str,
    ) -> Result<(), ClientError> {
        self.post_status("edit-review", &EditRequest { review, rating, text })
            .await
    }

    /// Delete a review.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server rejects it.
    #[instrument(skip(self, review), fields(review = %review))]
    pub async fn delete_review(&self, review: ReviewId) -> Result<(), ClientError> {
        self.post_status("delete-review", &DeleteRequest { review })
            .await
    }

    // =========================================================================
    // Follow
    // =========================================================================

    /// Follow `followed`. Returns the server's `success` flag.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn follow_user(&self, follower: &str, followed: &str) -> Result<bool, ClientError> {
        let response: FollowResponse = self
            .post_json("user-follow", &FollowRequest { follower, followed })
            .await?;
        Ok(response.success)
    }

    /// Stop following `followed`. Returns the server's `success` flag.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn unfollow_user(
        &self,
        follower: &str,
        followed: &str,
    ) -> Result<bool, ClientError> {
        let response: FollowResponse = self
            .post_json("user-unfollow", &FollowRequest { follower, followed })
            .await?;
        Ok(response.success)
    }

    /// Whether `follower` follows `followed`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn is_following(&self, follower: &str, followed: &str) -> Result<bool, ClientError> {
        let response: FollowingResponse = self
            .post_json("user-following", &FollowRequest { follower, followed })
            .await?;
        Ok(response.following)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn password_field<'a>(&self, password: &'a Password) -> PasswordField<'a> {
        if self.hash_passwords {
            PasswordField::Hashed {
                hashed_password: password.digest(),
            }
        } else {
            PasswordField::Plain {
                password: password.expose(),
            }
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url).send().await?;
        Self::parse_json(path, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self.client.post(url).json(body).send().await?;
        Self::parse_json(path, response).await
    }

    /// POST where only the status matters.
    async fn post_status<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let url = self.endpoint(path)?;
        let response = self.client.post(url).json(body).send().await?;
        Self::check_status(path, response).await.map(|_| ())
    }

    async fn parse_json<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::check_status(path, response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("{path}: {e}")))
    }

    async fn check_status(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        warn!(
            endpoint = %path,
            status = status.as_u16(),
            body = %message,
            "PlayLog API returned non-success status"
        );
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(hash: bool) -> PlayLogClient {
        let config = ClientConfig::new("http://localhost:8000/api")
            .unwrap()
            .with_hashed_passwords(hash);
        PlayLogClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoints_join_under_base() {
        let client = client(false);
        assert_eq!(
            client.endpoint("like-review").unwrap().as_str(),
            "http://localhost:8000/api/like-review"
        );
        assert_eq!(
            client.endpoint("game-info/hades/").unwrap().as_str(),
            "http://localhost:8000/api/game-info/hades/"
        );
    }

    #[test]
    fn test_plain_password_field() {
        let password = Password::unchecked("hunter2");
        let body = LoginRequest {
            email: "user@cmpe.com",
            password: client(false).password_field(&password),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "user@cmpe.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_hashed_password_field() {
        let password = Password::unchecked("abcdefgH1");
        let body = SignupRequest {
            username: "gamer_01",
            email: "user@cmpe.com",
            password: client(true).password_field(&password),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["hashedPassword"], password.digest());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_review_bodies() {
        let like = serde_json::to_value(LikeRequest {
            review: ReviewId::new(5),
            user: "gamer_01",
        })
        .unwrap();
        assert_eq!(like, serde_json::json!({"review": 5, "user": "gamer_01"}));

        let edit = serde_json::to_value(EditRequest {
            review: ReviewId::new(5),
            rating: Rating::new(3).unwrap(),
            text: "meh",
        })
        .unwrap();
        assert_eq!(
            edit,
            serde_json::json!({"review": 5, "rating": 3, "text": "meh"})
        );
    }

    #[test]
    fn test_debug_hides_http_client() {
        let rendered = format!("{:?}", client(true));
        assert!(rendered.contains("http://localhost:8000/api/"));
        assert!(rendered.contains("hash_passwords: true"));
    }
}
