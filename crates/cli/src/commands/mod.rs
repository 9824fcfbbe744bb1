//! CLI subcommands.
//!
//! # Environment Variables
//!
//! - `SOLECRAFT_DATABASE_URL` - used by `migrate` and `seed`
//! - `SOLECRAFT_API_URL` - studio base URL (default: <http://127.0.0.1:3000>)
//! - `SOLECRAFT_USER_ID` - owner id sent with design commands

use solecraft_client::{ApiClient, ClientError};
use solecraft_core::{RenderError, UserId};
use solecraft_studio::config::ConfigError;
use solecraft_studio::db::RepositoryError;
use url::Url;

pub mod designs;
pub mod migrate;
pub mod render;
pub mod seed;

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Preview render failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),

    #[error("{0} not found")]
    NotFound(String),
}

/// Studio client from `SOLECRAFT_API_URL` and `SOLECRAFT_USER_ID`.
///
/// Without a user id the client can still reach the catalogue and the AI
/// designer; design commands then fail with `MissingUser`.
///
/// # Errors
///
/// Returns an error if either variable is set but malformed.
pub fn api_client() -> Result<ApiClient, CommandError> {
    let _ = dotenvy::dotenv();

    let base = std::env::var("SOLECRAFT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let base = Url::parse(&base)
        .map_err(|e| CommandError::InvalidEnvVar("SOLECRAFT_API_URL", e.to_string()))?;

    match std::env::var("SOLECRAFT_USER_ID") {
        Ok(raw) => {
            let user = raw
                .trim()
                .parse::<UserId>()
                .map_err(|e| CommandError::InvalidEnvVar("SOLECRAFT_USER_ID", e.to_string()))?;
            Ok(ApiClient::with_user(base, user))
        }
        Err(_) => Ok(ApiClient::new(base)),
    }
}
