//! Studio configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SOLECRAFT_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`; when neither is set designs are kept in memory)
//! - `SOLECRAFT_HOST` - Bind address (default: 127.0.0.1)
//! - `SOLECRAFT_PORT` - Listen port (default: 3000)
//! - `GEMINI_API_KEY` - Google Gemini API key (the AI designer answers 500
//!   while this is unset)
//! - `GEMINI_MODEL` - Model name (default: gemini-1.5-flash)
//! - `GEMINI_API_BASE` - API base URL (default: the public v1beta endpoint)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Studio application configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// `PostgreSQL` connection URL; `None` selects in-memory storage
    pub database_url: Option<SecretString>,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production", "staging")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry trace sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Gemini API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; `None` means the AI designer is not configured
    pub api_key: Option<SecretString>,
    /// Model used for `generateContent`
    pub model: String,
    /// Base URL, without trailing slash
    pub api_base: Url,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("api_base", &self.api_base.as_str())
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            api_base: default_api_base(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SOLECRAFT_DATABASE_URL");
        let host = parse_env("SOLECRAFT_HOST", "127.0.0.1")?;
        let port = parse_env("SOLECRAFT_PORT", "3000")?;
        let gemini = GeminiConfig::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            gemini,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_env("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The database URL, for commands that cannot fall back to memory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if no database URL is configured.
    pub fn require_database_url(&self) -> Result<&SecretString, ConfigError> {
        self.database_url
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SOLECRAFT_DATABASE_URL".to_string()))
    }
}

impl GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_base = get_env_or_default("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE);
        let api_base = Url::parse(api_base.trim_end_matches('/'))
            .map_err(|e| ConfigError::InvalidEnvVar("GEMINI_API_BASE".to_string(), e.to_string()))?;

        Ok(Self {
            api_key: get_optional_env("GEMINI_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            api_base,
        })
    }
}

#[allow(clippy::expect_used)]
fn default_api_base() -> Url {
    Url::parse(DEFAULT_GEMINI_API_BASE).expect("default Gemini base URL is valid")
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Option<SecretString> {
    get_optional_env(primary_key)
        .or_else(|| get_optional_env("DATABASE_URL"))
        .map(SecretString::from)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, using `default` when it is unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
