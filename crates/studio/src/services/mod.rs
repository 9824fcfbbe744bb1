//! Business logic that sits between route handlers and external systems.

pub mod designer;

pub use designer::{Designer, SuggestionError, TextGenerator};
