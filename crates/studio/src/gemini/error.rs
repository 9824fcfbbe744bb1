//! Error types for the Gemini API client.

use thiserror::Error;

/// Errors that can occur when calling the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key is configured.
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// The project's quota or billing limit is exhausted.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other non-success status.
    #[error("Gemini API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message, or the raw body when it could not be parsed.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Error envelope returned by the Gemini API.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Error details inside [`ApiErrorResponse`].
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// Canonical status name such as `RESOURCE_EXHAUSTED`.
    #[serde(default)]
    pub status: String,
}

impl ApiError {
    /// Whether this 429 means "out of quota" rather than "slow down".
    #[must_use]
    pub fn is_quota(&self) -> bool {
        let message = self.message.to_ascii_lowercase();
        message.contains("quota") || message.contains("billing")
    }
}
