//! Pulling a JSON object out of free-form model output.
//!
//! Models asked for "only JSON" still sometimes wrap the answer in a markdown
//! code fence or add a sentence around it. [`parse_reply`] strips an optional
//! fence, finds the first top-level `{...}` object and parses it.

use serde_json::Value;

/// Why no JSON value could be obtained from a reply.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The reply is empty or whitespace.
    #[error("reply is empty")]
    Empty,

    /// The reply contains no `{` at all.
    #[error("reply contains no JSON object")]
    NoJsonObject,

    /// An object was located but is not valid JSON.
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Remove a surrounding markdown code fence, if there is one.
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` openers, on their own
/// line or on the same line as the body. Text without a fence is returned
/// trimmed.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (e.g. "json") on the opening line. A fence opened
    // and closed on one line keeps its body after the info word.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Locate the first balanced top-level JSON object in `text`.
///
/// Braces inside string literals (including escaped quotes) are not counted.
/// Returns `None` if there is no `{` or the first object is never closed.
#[must_use]
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text.get(start..)?.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return text.get(start..end);
                }
            }
            _ => {}
        }
    }

    None
}

/// Extract and parse the JSON object from a model reply.
///
/// # Errors
///
/// - [`ExtractError::Empty`] for a blank reply
/// - [`ExtractError::NoJsonObject`] when there is nothing resembling an object
/// - [`ExtractError::InvalidJson`] when the located object does not parse
pub fn parse_reply(text: &str) -> Result<Value, ExtractError> {
    let unfenced = strip_code_fence(text);
    if unfenced.is_empty() {
        return Err(ExtractError::Empty);
    }
    if !unfenced.contains('{') {
        return Err(ExtractError::NoJsonObject);
    }

    let object = find_json_object(unfenced)
        .ok_or_else(|| ExtractError::InvalidJson("unterminated JSON object".to_owned()))?;

    serde_json::from_str(object).map_err(|e| ExtractError::InvalidJson(e.to_string()))
}
