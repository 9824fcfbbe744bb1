//! Four-color schemes suggested by the AI designer.
//!
//! Validation is data-driven: [`REQUIRED_PARTS`] lists the keys a reply must
//! carry, and each value must parse as a [`HexColor`]. A reply with a missing
//! or malformed key is rejected outright; no fallback color is substituted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::configuration::{ConfigurationPatch, Part};
use crate::types::HexColor;

/// Keys every suggested scheme must contain.
pub const REQUIRED_PARTS: [Part; 4] = Part::ALL;

/// Why a parsed reply is not a usable color scheme.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// The top-level JSON value is not an object.
    #[error("expected a JSON object")]
    NotAnObject,

    /// A required key is absent.
    #[error("missing color for {0}")]
    Missing(Part),

    /// A required key holds something other than `#RRGGBB`.
    #[error("invalid color for {part}: {value}")]
    Malformed {
        /// Offending part.
        part: Part,
        /// The value as it appeared in the reply.
        value: String,
    },
}

/// A validated color for each of the four parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub sole: HexColor,
    pub upper: HexColor,
    pub laces: HexColor,
    pub logo: HexColor,
}

impl ColorScheme {
    #[must_use]
    pub const fn color(&self, part: Part) -> &HexColor {
        match part {
            Part::Sole => &self.sole,
            Part::Upper => &self.upper,
            Part::Laces => &self.laces,
            Part::Logo => &self.logo,
        }
    }
}

impl From<ColorScheme> for ConfigurationPatch {
    fn from(scheme: ColorScheme) -> Self {
        Self {
            sole: Some(scheme.sole),
            upper: Some(scheme.upper),
            laces: Some(scheme.laces),
            logo: Some(scheme.logo),
            ..Self::default()
        }
    }
}

/// Check a parsed reply and extract its color scheme.
///
/// Keys other than the four parts are ignored. Hex digit case is preserved.
///
/// # Errors
///
/// Returns the first problem found, checking parts in [`REQUIRED_PARTS`]
/// order.
pub fn validate_scheme(value: &Value) -> Result<ColorScheme, SchemeError> {
    let object = value.as_object().ok_or(SchemeError::NotAnObject)?;

    let color = |part: Part| -> Result<HexColor, SchemeError> {
        let raw = object.get(part.key()).ok_or(SchemeError::Missing(part))?;
        raw.as_str()
            .and_then(|s| HexColor::parse(s).ok())
            .ok_or_else(|| SchemeError::Malformed {
                part,
                value: raw.as_str().map_or_else(|| raw.to_string(), str::to_owned),
            })
    };

    let [sole, upper, laces, logo] = REQUIRED_PARTS;
    Ok(ColorScheme {
        sole: color(sole)?,
        upper: color(upper)?,
        laces: color(laces)?,
        logo: color(logo)?,
    })
}
