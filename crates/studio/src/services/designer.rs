//! The AI designer: prompt in, validated four-color scheme out.
//!
//! The model call sits behind [`TextGenerator`] so tests can swap in a canned
//! reply. Everything after the call is pure: [`reply::parse_reply`] pulls the
//! JSON object out of the text and [`validate_scheme`] checks the four colors.
//!
//! [`reply::parse_reply`]: solecraft_core::reply::parse_reply

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use solecraft_core::prompts::build_designer_prompt;
use solecraft_core::reply::{ExtractError, parse_reply};
use solecraft_core::{ColorScheme, SchemeError, validate_scheme};

use crate::gemini::{GeminiClient, GeminiError};

/// A hosted model that answers one text prompt with one text reply.
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// Generate a reply. `Ok(None)` means the model produced no text.
    async fn generate(&self, prompt: String) -> Result<Option<String>, GeminiError>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: String) -> Result<Option<String>, GeminiError> {
        self.generate_text(prompt).await
    }
}

/// Why a suggestion could not be produced.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// The prompt is empty or whitespace.
    #[error("Prompt is required")]
    EmptyPrompt,

    /// The model call failed.
    #[error(transparent)]
    Upstream(#[from] GeminiError),

    /// The model answered with no text at all.
    #[error("No content in AI response")]
    NoContent,

    /// The reply text did not contain usable JSON.
    #[error("AI returned invalid JSON format: {0}")]
    InvalidJson(#[from] ExtractError),

    /// The JSON is missing a part or holds a malformed color.
    #[error("AI returned an invalid color scheme: {0}")]
    InvalidScheme(#[from] SchemeError),
}

/// Stateless gateway from prompts to color schemes.
#[derive(Clone)]
pub struct Designer {
    generator: Arc<dyn TextGenerator>,
}

impl Designer {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the model for a color scheme matching `prompt`.
    ///
    /// # Errors
    ///
    /// See [`SuggestionError`]. There is no retry and no partial result: any
    /// missing or malformed color fails the whole suggestion.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn suggest(&self, prompt: &str) -> Result<ColorScheme, SuggestionError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SuggestionError::EmptyPrompt);
        }

        let reply = self
            .generator
            .generate(build_designer_prompt(prompt))
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or(SuggestionError::NoContent)?;

        let value = parse_reply(&reply).inspect_err(|e| {
            tracing::warn!(error = %e, reply = %reply, "Unparseable AI reply");
        })?;
        let scheme = validate_scheme(&value)?;

        tracing::info!(
            sole = %scheme.sole,
            upper = %scheme.upper,
            laces = %scheme.laces,
            logo = %scheme.logo,
            "AI color scheme generated"
        );
        Ok(scheme)
    }
}
