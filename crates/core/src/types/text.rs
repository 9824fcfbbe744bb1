//! Personalization text printed on the heel.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CustomText`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomTextError {
    /// The input is longer than the printable area allows.
    #[error("custom text must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Short free-form text, used verbatim.
///
/// Any characters are accepted; only the length is bounded. Length is counted
/// in Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomText(String);

impl CustomText {
    /// Maximum number of characters.
    pub const MAX_CHARS: usize = 10;

    /// Parse a `CustomText` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`CustomTextError::TooLong`] if the input exceeds
    /// [`Self::MAX_CHARS`] characters.
    pub fn parse(s: &str) -> Result<Self, CustomTextError> {
        Self::try_from(s.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for CustomText {
    type Error = CustomTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.chars().count() > Self::MAX_CHARS {
            return Err(CustomTextError::TooLong {
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(value))
    }
}

impl From<CustomText> for String {
    fn from(text: CustomText) -> Self {
        text.0
    }
}

impl fmt::Display for CustomText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
