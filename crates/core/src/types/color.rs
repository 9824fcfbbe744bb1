//! Six-digit hex color type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern every part color must match.
pub const HEX_COLOR_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HEX_COLOR_PATTERN).expect("HEX_COLOR_PATTERN is a valid regular expression")
});

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// The input does not look like `#RRGGBB`.
    #[error("invalid hex color {0:?}: expected '#' followed by six hex digits")]
    Invalid(String),
}

/// A color written as `#` followed by exactly six hex digits.
///
/// The original letter case is preserved, so `#FFaa00` round-trips verbatim.
/// Comparisons are on the literal text.
///
/// ## Examples
///
/// ```
/// use solecraft_core::HexColor;
///
/// assert!(HexColor::parse("#1a1a1a").is_ok());
/// assert!(HexColor::parse("#00A8FF").is_ok());
///
/// assert!(HexColor::parse("1a1a1a").is_err());   // missing #
/// assert!(HexColor::parse("#fff").is_err());     // short form
/// assert!(HexColor::parse("#gggggg").is_err());  // not hex
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `HexColor` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError::Invalid`] unless the input matches
    /// [`HEX_COLOR_PATTERN`] exactly (no surrounding whitespace).
    pub fn parse(s: &str) -> Result<Self, HexColorError> {
        if HEX_COLOR_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(HexColorError::Invalid(s.to_owned()))
        }
    }

    /// Pure black, the one value the contrast guard cares about.
    #[must_use]
    pub fn black() -> Self {
        Self("#000000".to_owned())
    }

    /// Literal colors compiled into the crate.
    pub(crate) fn known(s: &'static str) -> Self {
        debug_assert!(HEX_COLOR_RE.is_match(s), "bad built-in color {s}");
        Self(s.to_owned())
    }

    /// Returns the color as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is `#000000`.
    #[must_use]
    pub fn is_black(&self) -> bool {
        self.0 == "#000000"
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if HEX_COLOR_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(HexColorError::Invalid(value))
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
