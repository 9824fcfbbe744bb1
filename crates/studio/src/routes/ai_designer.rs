//! `POST /api/ai-designer`: turn a mood or theme into a color scheme.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};

use solecraft_core::ColorScheme;

use crate::error::{AppError, Result};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/ai-designer", post(suggest))
}

/// Request body.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub colors: ColorScheme,
}

/// Ask the AI designer for a scheme.
///
/// # Errors
///
/// 400 for a blank prompt, 500 when no API key is configured, 429 or 402
/// when the model provider throttles or is out of quota, 502 for any other
/// upstream failure or an unusable reply.
pub async fn suggest(
    State(state): State<AppState>,
    body: std::result::Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let colors = state.designer().suggest(&body.prompt).await?;
    Ok(Json(SuggestResponse { colors }))
}
