//! Typed client for the studio HTTP API.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use url::Url;

use solecraft_core::{ColorScheme, DesignId, NewDesign, Product, ProductId, SavedDesign, UserId};

use crate::error::ClientError;

/// Header carrying the caller's identity on owner-scoped endpoints.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Serialize)]
struct SuggestRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct SuggestResponse {
    colors: ColorScheme,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Studio API client.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: Url,
    user_id: Option<UserId>,
}

impl ApiClient {
    /// Create a client for anonymous endpoints only.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (TLS backend unavailable).
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::build(base_url, None)
    }

    /// Create a client acting on behalf of `user_id`.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (TLS backend unavailable).
    #[must_use]
    pub fn with_user(base_url: Url, user_id: UserId) -> Self {
        Self::build(base_url, Some(user_id))
    }

    fn build(mut base_url: Url, user_id: Option<UserId>) -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        // Relative joins replace the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url,
                user_id,
            }),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.inner.user_id
    }

    /// Ask the AI designer for a color scheme.
    ///
    /// # Errors
    ///
    /// Rate limiting (429) and quota exhaustion (402) have their own
    /// variants; every other failure status is [`ClientError::Api`].
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn suggest_colors(&self, prompt: &str) -> Result<ColorScheme, ClientError> {
        let request = self
            .inner
            .http
            .post(self.url("api/ai-designer")?)
            .json(&SuggestRequest { prompt });

        let body: SuggestResponse = decode(request.send().await?).await?;
        Ok(body.colors)
    }

    /// The product catalogue, default product first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.inner.http.get(self.url("api/products")?).send().await?;
        decode(response).await
    }

    /// The product shown when the customizer opens.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the catalogue is empty.
    #[instrument(skip(self))]
    pub async fn default_product(&self) -> Result<Product, ClientError> {
        let response = self
            .inner
            .http
            .get(self.url("api/products/default")?)
            .send()
            .await?;
        decode(response).await
    }

    /// One product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        let response = self
            .inner
            .http
            .get(self.url(&format!("api/products/{id}"))?)
            .send()
            .await?;
        decode(response).await
    }

    /// The caller's saved designs, newest first.
    ///
    /// A non-blank `query` keeps designs whose name or tags contain it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingUser`] without a user id, or an error if
    /// the request fails.
    #[instrument(skip(self))]
    pub async fn list_designs(&self, query: Option<&str>) -> Result<Vec<SavedDesign>, ClientError> {
        let mut url = self.url("api/designs")?;
        if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair("q", q);
        }

        let response = self.owned(self.inner.http.get(url))?.send().await?;
        decode(response).await
    }

    /// Persist a design for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingUser`] without a user id, or an error if
    /// the studio rejects the design.
    #[instrument(skip(self, design), fields(name = %design.name))]
    pub async fn save_design(&self, design: &NewDesign) -> Result<SavedDesign, ClientError> {
        let request = self
            .owned(self.inner.http.post(self.url("api/designs")?))?
            .json(design);
        decode(request.send().await?).await
    }

    /// Delete one of the caller's designs.
    ///
    /// Succeeds once per design; later calls get [`ClientError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the design is gone or belongs to
    /// someone else.
    #[instrument(skip(self))]
    pub async fn delete_design(&self, id: DesignId) -> Result<(), ClientError> {
        let url = self.url(&format!("api/designs/{id}"))?;
        let response = self.owned(self.inner.http.delete(url))?.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.inner.base_url.join(path)?)
    }

    fn owned(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let user_id = self.inner.user_id.ok_or(ClientError::MissingUser)?;
        Ok(request.header(USER_ID_HEADER, user_id.to_string()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json().await?)
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return ClientError::Http(e),
    };
    tracing::debug!(status, body = %body, "Studio API error");

    let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |b| b.error);
    ClientError::from_status(status, message)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let api = client("http://127.0.0.1:3000/studio");
        assert_eq!(api.base_url().as_str(), "http://127.0.0.1:3000/studio/");
        assert_eq!(
            api.url("api/products").unwrap().as_str(),
            "http://127.0.0.1:3000/studio/api/products"
        );
    }

    #[test]
    fn test_url_at_root() {
        let api = client("http://localhost:3000");
        assert_eq!(
            api.url("api/designs").unwrap().as_str(),
            "http://localhost:3000/api/designs"
        );
    }

    #[tokio::test]
    async fn test_owner_endpoints_require_user() {
        let api = client("http://127.0.0.1:9");
        let err = api.list_designs(None).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingUser));
    }

    #[test]
    fn test_with_user_keeps_id() {
        let user = UserId::generate();
        let api = ApiClient::with_user(Url::parse("http://localhost").unwrap(), user);
        assert_eq!(api.user_id(), Some(user));
    }
}
