//! Caller identity.
//!
//! The studio sits behind an auth layer that authenticates the user and
//! forwards their id in `x-user-id`. Handlers that touch saved designs take
//! [`RequireOwner`]; a missing or malformed header is a 401.

use axum::{extract::FromRequestParts, http::request::Parts};

use solecraft_core::UserId;

use crate::error::{AppError, set_sentry_user};

/// The HTTP header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the authenticated owner of the request.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireOwner(owner): RequireOwner) -> String {
///     format!("Hello, {owner}!")
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireOwner(pub UserId);

impl<S> FromRequestParts<S> for RequireOwner
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let owner: UserId = raw
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid user id".to_string()))?;

        set_sentry_user(&owner);
        Ok(Self(owner))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    use super::*;

    async fn extract(header: Option<&str>) -> Result<RequireOwner, AppError> {
        let mut builder = Request::builder().uri("/api/designs");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        RequireOwner::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_header() {
        let id = UserId::generate();
        let RequireOwner(owner) = extract(Some(&id.to_string())).await.unwrap();
        assert_eq!(owner, id);
    }

    #[tokio::test]
    async fn test_missing_header_is_401() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_header_is_401() {
        let err = extract(Some("not-a-uuid")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
