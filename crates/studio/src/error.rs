//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Errors render as
//! `{"error": "..."}` with a status chosen per variant; server-class errors
//! are captured to Sentry first and their details are never sent to clients.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::gemini::GeminiError;
use crate::services::SuggestionError;

/// Application-level error type for the studio.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// The AI designer could not produce a scheme.
    #[error("AI designer error: {0}")]
    Suggestion(#[from] SuggestionError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller identity missing or malformed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(RepositoryError::NotFound) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Suggestion(err) => suggestion_status(err),
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message. Internal details stay in logs and Sentry.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(RepositoryError::NotFound) => "Not found".to_string(),
            Self::Database(RepositoryError::Conflict(msg)) => msg.clone(),
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Suggestion(err) => suggestion_message(err),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
        }
    }

    const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::Suggestion(SuggestionError::Upstream(GeminiError::RateLimited(secs))) => {
                Some(*secs)
            }
            _ => None,
        }
    }
}

const fn suggestion_status(err: &SuggestionError) -> StatusCode {
    match err {
        SuggestionError::EmptyPrompt => StatusCode::BAD_REQUEST,
        SuggestionError::Upstream(GeminiError::MissingApiKey) => StatusCode::INTERNAL_SERVER_ERROR,
        SuggestionError::Upstream(GeminiError::RateLimited(_)) => StatusCode::TOO_MANY_REQUESTS,
        SuggestionError::Upstream(GeminiError::QuotaExceeded(_)) => StatusCode::PAYMENT_REQUIRED,
        SuggestionError::Upstream(_)
        | SuggestionError::NoContent
        | SuggestionError::InvalidJson(_)
        | SuggestionError::InvalidScheme(_) => StatusCode::BAD_GATEWAY,
    }
}

fn suggestion_message(err: &SuggestionError) -> String {
    match err {
        SuggestionError::EmptyPrompt => "Prompt is required".to_string(),
        SuggestionError::Upstream(GeminiError::MissingApiKey) => {
            "AI designer is not configured".to_string()
        }
        SuggestionError::Upstream(GeminiError::RateLimited(_)) => {
            "Rate limit exceeded. Please try again in a moment.".to_string()
        }
        SuggestionError::Upstream(GeminiError::QuotaExceeded(_)) => {
            "AI quota exceeded. Please add credits to continue.".to_string()
        }
        SuggestionError::Upstream(_) => "AI service error".to_string(),
        SuggestionError::NoContent
        | SuggestionError::InvalidJson(_)
        | SuggestionError::InvalidScheme(_) => "Invalid AI response".to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let retry_after = self.retry_after();
        let body = ErrorBody {
            error: self.public_message(),
        };
        let mut response = (status, Json(body)).into_response();

        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(secs));
        }

        response
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from the caller's id.
pub fn set_sentry_user(user_id: &impl ToString) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            ..Default::default()
        }));
    });
}

#[cfg(test)]
mod tests {
    use solecraft_core::SchemeError;
    use solecraft_core::reply::ExtractError;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    fn upstream(err: GeminiError) -> AppError {
        AppError::Suggestion(SuggestionError::Upstream(err))
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Design".to_string());
        assert_eq!(err.to_string(), "Not found: Design");

        let err = AppError::BadRequest("Name required".to_string());
        assert_eq!(err.to_string(), "Bad request: Name required");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::Conflict("x".to_string()))),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_suggestion_status_codes() {
        assert_eq!(
            get_status(AppError::Suggestion(SuggestionError::EmptyPrompt)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(upstream(GeminiError::MissingApiKey)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(upstream(GeminiError::RateLimited(10))),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            get_status(upstream(GeminiError::QuotaExceeded("billing".to_string()))),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            get_status(upstream(GeminiError::Api {
                status: 500,
                message: "boom".to_string()
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Suggestion(SuggestionError::InvalidJson(
                ExtractError::NoJsonObject
            ))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Suggestion(SuggestionError::InvalidScheme(
                SchemeError::NotAnObject
            ))),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let response = upstream(GeminiError::RateLimited(17)).into_response();
        assert_eq!(
            response.headers().get(RETRY_AFTER).and_then(|v| v.to_str().ok()),
            Some("17")
        );
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AppError::Internal("connection string postgres://secret".to_string());
        assert_eq!(err.public_message(), "Internal server error");

        let err = upstream(GeminiError::Api {
            status: 500,
            message: "stack trace".to_string(),
        });
        assert_eq!(err.public_message(), "AI service error");
    }
}
