//! Gemini API client for single-shot text generation.

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;
use url::Url;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Gemini API client.
///
/// Cheap to clone; all clones share one connection pool. A client built
/// without an API key still constructs, and every call returns
/// [`GeminiError::MissingApiKey`].
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    api_base: Url,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (TLS backend unavailable).
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                api_key: config.api_key.clone(),
                model: config.model.clone(),
                api_base: config.api_base.clone(),
            }),
        }
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.api_key.is_some()
    }

    /// Send one prompt and return the text of the first candidate part.
    ///
    /// Returns `Ok(None)` when the model answered without any text (for
    /// instance a safety block).
    ///
    /// # Errors
    ///
    /// Returns an error if no key is configured, the request fails, or the
    /// API answers with a non-success status.
    #[instrument(skip(self, prompt), fields(model = %self.inner.model, prompt_len = prompt.len()))]
    pub async fn generate_text(&self, prompt: String) -> Result<Option<String>, GeminiError> {
        let api_key = self
            .inner
            .api_key
            .as_ref()
            .ok_or(GeminiError::MissingApiKey)?;

        let url = self.endpoint(api_key)?;
        let request = GenerateContentRequest::json_reply(prompt);

        let response = self.inner.client.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;

        Ok(parsed.first_text().map(str::to_owned))
    }

    fn endpoint(&self, api_key: &SecretString) -> Result<Url, GeminiError> {
        let base = self.inner.api_base.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{base}/models/{}:generateContent",
            self.inner.model
        ))
        .map_err(|e| GeminiError::Parse(format!("Invalid endpoint URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("key", api_key.expose_secret());
        Ok(url)
    }
}

/// Map a non-success status to a [`GeminiError`].
async fn handle_error_status(status: StatusCode, response: reqwest::Response) -> GeminiError {
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60);

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return GeminiError::Http(e),
    };
    tracing::warn!(status = status.as_u16(), body = %body, "Gemini API error");

    classify_error(status, retry_after, &body)
}

/// Decide which error a failed response represents.
fn classify_error(status: StatusCode, retry_after: u64, body: &str) -> GeminiError {
    let api_error = serde_json::from_str::<ApiErrorResponse>(body).ok();

    match status {
        StatusCode::PAYMENT_REQUIRED => GeminiError::QuotaExceeded(
            api_error.map_or_else(|| body.to_owned(), |e| e.error.message),
        ),
        StatusCode::TOO_MANY_REQUESTS => match api_error {
            Some(e) if e.error.is_quota() => GeminiError::QuotaExceeded(e.error.message),
            _ => GeminiError::RateLimited(retry_after),
        },
        _ => GeminiError::Api {
            status: status.as_u16(),
            message: api_error.map_or_else(|| body.to_owned(), |e| e.error.message),
        },
    }
}
