//! Client and session error types.

use solecraft_core::{ContrastViolation, CustomTextError, DesignNameError, RenderError};
use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Owner-scoped endpoint called without a user id.
    #[error("No user id configured")]
    MissingUser,

    /// The studio answered 429.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The studio answered 402.
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The studio answered 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the body, or the raw body.
        message: String,
    },
}

impl ClientError {
    /// Map a non-success status and its message to an error.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            402 => Self::QuotaExceeded(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimited(message),
            _ => Self::Api { status, message },
        }
    }

    /// HTTP status of the response, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::QuotaExceeded(_) => Some(402),
            Self::NotFound(_) => Some(404),
            Self::RateLimited(_) => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Url(_) | Self::MissingUser => None,
        }
    }

    /// Whether the server reported a fault of its own or of its upstream.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}

/// An asynchronous customizer action, each with its own in-flight gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AskAi,
    Save,
    Delete,
    Load,
    Product,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AskAi => "ask-ai",
            Self::Save => "save",
            Self::Delete => "delete",
            Self::Load => "load",
            Self::Product => "product",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`crate::Customizer`].
///
/// Whatever the variant, the design store is left as it was.
#[derive(Debug, Error)]
pub enum CustomizerError {
    /// The same action is already in flight.
    #[error("{0} already in progress")]
    Busy(Action),

    /// A manual color pick would hide the logo.
    #[error(transparent)]
    Contrast(#[from] ContrastViolation),

    /// Custom text is too long.
    #[error(transparent)]
    Text(#[from] CustomTextError),

    /// Design name is blank.
    #[error(transparent)]
    Name(#[from] DesignNameError),

    /// The studio call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The preview template failed.
    #[error("Preview render failed: {0}")]
    Render(#[from] RenderError),
}
