//! Integration tests for the PlayLog client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p playlog-integration-tests
//! ```
//!
//! Each test starts a [`FakeApi`] on an ephemeral port and points a real
//! [`PlayLogClient`] at it. The fake records every request so tests can
//! assert on the exact bodies sent.
//!
//! # Fixtures
//!
//! - Account `gamer_01` / `user@cmpe.com` with password [`PASSWORD`]
//! - Username `taken_name` already exists, so signing it up is refused
//! - `forgot-password` knows only [`EMAIL`]
//! - Recent reviews: #1 by `gamer_01` on `hades`, #2 by `other_user`

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use playlog_client::{ClientConfig, PlayLogClient};

/// Password of the fixture account.
pub const PASSWORD: &str = "abcdefgH1";
/// Email of the fixture account.
pub const EMAIL: &str = "user@cmpe.com";
/// Username of the fixture account.
pub const USERNAME: &str = "gamer_01";
/// Username the fake treats as already registered.
pub const TAKEN_USERNAME: &str = "taken_name";

/// A request the fake received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path without the leading `/`.
    pub path: String,
    /// JSON body, `Value::Null` when empty.
    pub body: Value,
}

#[derive(Default)]
struct FakeState {
    requests: Mutex<Vec<RecordedRequest>>,
    failing: Mutex<HashSet<String>>,
    following: Mutex<bool>,
    nested_new_games: Mutex<bool>,
}

/// In-process stand-in for the PlayLog API.
pub struct FakeApi {
    addr: SocketAddr,
    state: Arc<FakeState>,
    handle: JoinHandle<()>,
}

impl FakeApi {
    /// Bind to an ephemeral port and start serving.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot bind.
    pub async fn start() -> std::io::Result<Self> {
        let state = Arc::new(FakeState::default());
        *state.nested_new_games.lock().await = true;

        let app = Router::new().fallback(dispatch).with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            // The server only stops when the test drops the handle.
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Base URL to configure the client with.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Client configuration pointing at this fake.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL does not parse.
    pub fn config(&self) -> Result<ClientConfig, playlog_client::ConfigError> {
        ClientConfig::new(&self.base_url())
    }

    /// A client pointing at this fake.
    ///
    /// # Errors
    ///
    /// Returns error if the client cannot be built.
    pub fn client(&self) -> Result<PlayLogClient, Box<dyn std::error::Error>> {
        Ok(PlayLogClient::new(&self.config()?)?)
    }

    /// Make `path` (e.g. `"like-review"`) answer 500 from now on.
    pub async fn fail(&self, path: &str) {
        self.state.failing.lock().await.insert(path.to_string());
    }

    /// Serve `new-games` as a flat list instead of the nested shape.
    pub async fn flat_new_games(&self) {
        *self.state.nested_new_games.lock().await = false;
    }

    /// Every request received so far.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Requests received for `path`.
    pub async fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn dispatch(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().trim_start_matches('/').to_string();
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state.requests.lock().await.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    if state.failing.lock().await.contains(&path) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "forced failure").into_response();
    }

    match (method, path.as_str()) {
        (Method::POST, "login") => login(&body),
        (Method::POST, "signup") => signup(&body),
        (Method::POST, "forgot-password") => {
            Json(json!({"userNotFound": body["email"] != EMAIL})).into_response()
        }
        (Method::GET, "game-of-the-day") => Json(json!({
            "game_slug": "hades",
            "gameLabel": "Hades",
            "image": "https://img.example/hades.png",
            "publisherLabel": "Supergiant Games"
        }))
        .into_response(),
        (Method::GET, "popular-games") => Json(json!({
            "games": [
                {"game_slug": "hades", "gameLabel": "Hades"},
                {"game_slug": "celeste", "gameLabel": "Celeste"}
            ]
        }))
        .into_response(),
        (Method::GET, "new-games") => {
            let games = json!([{"game_slug": "balatro", "gameLabel": "Balatro"}]);
            if *state.nested_new_games.lock().await {
                Json(json!({"games": {"games": games}})).into_response()
            } else {
                Json(json!({"games": games})).into_response()
            }
        }
        (Method::POST, "game-info/hades/") => Json(json!({
            "gameLabel": "Hades",
            "genreLabel": "roguelike",
            "publisherLabel": "Supergiant Games",
            "publication_date": "2020-09-17",
            "gameDescription": "2020 video game"
        }))
        .into_response(),
        (Method::POST, "recent-reviews") => Json(json!({
            "reviews": [
                {"id": 1, "user": USERNAME, "game_slug": "hades", "rating": 5, "text": "Loved it", "likes": 2},
                {"id": 2, "user": "other_user", "game_slug": "celeste", "rating": 4, "text": "Hard but fair", "likes": 0}
            ]
        }))
        .into_response(),
        (Method::POST, "search-game") => Json(json!({
            "games": [{"game_slug": "hades", "gameLabel": "Hades"}]
        }))
        .into_response(),
        (
            Method::POST,
            "create-review" | "like-review" | "unlike-review" | "edit-review" | "delete-review",
        ) => Json(json!({"success": true})).into_response(),
        (Method::POST, "user-follow") => {
            *state.following.lock().await = true;
            Json(json!({"success": true})).into_response()
        }
        (Method::POST, "user-unfollow") => {
            *state.following.lock().await = false;
            Json(json!({"success": true})).into_response()
        }
        (Method::POST, "user-following") => {
            let following = *state.following.lock().await;
            Json(json!({"following": following})).into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response(),
    }
}

fn login(body: &Value) -> Response {
    let email_ok = body["email"] == EMAIL;
    let password_ok = body["password"] == PASSWORD
        || body["hashedPassword"] == playlog_core::sha256_hex(PASSWORD);

    if email_ok && password_ok {
        Json(json!({"success": true, "message": "Login successful", "username": USERNAME}))
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid password"})),
        )
            .into_response()
    }
}

fn signup(body: &Value) -> Response {
    if body["username"] == TAKEN_USERNAME {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "UNIQUE constraint failed"})),
        )
            .into_response()
    } else {
        (
            StatusCode::CREATED,
            Json(json!({"success": true, "message": "User created successfully"})),
        )
            .into_response()
    }
}
