//! PlayLog CLI - Drive the PlayLog API from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Check a password against the signup rules
//! playlog validate password 'abcdefgH1'
//!
//! # Create an account, then log in
//! playlog signup -u gamer_01 -e user@cmpe.com -p 'abcdefgH1'
//! playlog login -e user@cmpe.com -p 'abcdefgH1'
//! playlog forgot-password -e user@cmpe.com
//!
//! # Browse
//! playlog games today
//! playlog search zelda
//! playlog reviews recent
//!
//! # Act as a user
//! playlog --user gamer_01 review like 42
//! playlog --user gamer_01 follow other_user
//! ```
//!
//! # Environment Variables
//!
//! - `PLAYLOG_API_URL` - Base URL of the PlayLog API (required for API commands)
//! - `PLAYLOG_HASH_PASSWORDS` - Send SHA-256 digests instead of passwords
//! - `SENTRY_DSN` / `SENTRY_ENVIRONMENT` - Error reporting (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playlog_core::{ReviewId, Session};

mod commands;

#[derive(Parser)]
#[command(name = "playlog")]
#[command(author, version, about = "PlayLog command-line client")]
struct Cli {
    /// Act as this logged-in user. Only sets who the command acts as
    /// locally; no session cookie from an earlier `login` is sent.
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// The session commands run under: the `--user` account, or a guest.
    fn session(&self) -> Session {
        self.user
            .as_ref()
            .map_or_else(Session::guest, |user| Session::authenticated(user.as_str(), ""))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check a value against the signup rules
    Validate {
        #[command(subcommand)]
        target: ValidateTarget,
    },
    /// Create an account
    Signup {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Log in and print the session user
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Request a password reset email
    ForgotPassword {
        #[arg(short, long)]
        email: String,
    },
    /// List games
    Games {
        #[command(subcommand)]
        list: GamesList,
    },
    /// Show metadata for one game
    Game {
        /// Game slug
        slug: String,
    },
    /// Search games by name prefix
    Search {
        term: String,
    },
    /// List reviews
    Reviews {
        #[command(subcommand)]
        list: ReviewsList,
    },
    /// Post, like, edit or delete a review
    Review {
        #[command(subcommand)]
        action: ReviewCommand,
    },
    /// Follow a user
    Follow {
        target: String,
    },
    /// Stop following a user
    Unfollow {
        target: String,
    },
    /// Check whether you follow a user
    Following {
        target: String,
    },
}

#[derive(Subcommand)]
enum ValidateTarget {
    /// Check a password
    Password { value: String },
    /// Check a username
    Username { value: String },
}

#[derive(Subcommand)]
enum GamesList {
    /// Game of the day
    Today,
    /// Most reviewed games
    Popular,
    /// Recently released games
    New,
}

#[derive(Subcommand)]
enum ReviewsList {
    /// Latest reviews
    Recent,
}

#[derive(Subcommand)]
enum ReviewCommand {
    /// Post a review
    Create {
        /// Game slug
        #[arg(short, long)]
        game: String,
        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: i64,
        #[arg(short, long)]
        text: String,
    },
    /// Like a review
    Like { id: i64 },
    /// Remove your like from a review
    Unlike { id: i64 },
    /// Replace your review's rating and text
    Edit {
        id: i64,
        #[arg(short, long)]
        rating: i64,
        #[arg(short, long)]
        text: String,
    },
    /// Delete your review
    Delete { id: i64 },
}

/// Initialize Sentry when `SENTRY_DSN` is set.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.is_empty())?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: std::env::var("SENTRY_ENVIRONMENT")
                .ok()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::debug!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        tracing::Level::TRACE => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "playlog=info,playlog_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let session = cli.session();

    match cli.command {
        Commands::Validate { target } => match target {
            ValidateTarget::Password { value } => commands::validate::password(&value)?,
            ValidateTarget::Username { value } => commands::validate::username(&value)?,
        },
        Commands::Signup {
            username,
            email,
            password,
        } => commands::auth::signup(username, email, password).await?,
        Commands::Login { email, password } => commands::auth::login(email, password).await?,
        Commands::ForgotPassword { email } => commands::auth::forgot_password(email).await?,
        Commands::Games { list } => match list {
            GamesList::Today => commands::games::today().await?,
            GamesList::Popular => commands::games::popular().await?,
            GamesList::New => commands::games::new().await?,
        },
        Commands::Game { slug } => commands::games::info(&slug).await?,
        Commands::Search { term } => commands::games::search(&term).await?,
        Commands::Reviews { list } => match list {
            ReviewsList::Recent => commands::reviews::recent(&session).await?,
        },
        Commands::Review { action } => match action {
            ReviewCommand::Create { game, rating, text } => {
                commands::reviews::create(&session, &game, rating, &text).await?;
            }
            ReviewCommand::Like { id } => {
                commands::reviews::like(&session, ReviewId::new(id)).await?;
            }
            ReviewCommand::Unlike { id } => {
                commands::reviews::unlike(&session, ReviewId::new(id)).await?;
            }
            ReviewCommand::Edit { id, rating, text } => {
                commands::reviews::edit(&session, ReviewId::new(id), rating, text).await?;
            }
            ReviewCommand::Delete { id } => {
                commands::reviews::delete(&session, ReviewId::new(id)).await?;
            }
        },
        Commands::Follow { target } => commands::follow::follow(&session, target).await?,
        Commands::Unfollow { target } => commands::follow::unfollow(&session, target).await?,
        Commands::Following { target } => commands::follow::following(&session, target).await?,
    }
    Ok(())
}
