//! Google Gemini API integration.
//!
//! Only the non-streaming `generateContent` call is used: one prompt in, one
//! text reply out.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::{ApiError, ApiErrorResponse, GeminiError};
pub use types::{GenerateContentRequest, GenerateContentResponse};
