//! Readability guard for manual color picks.
//!
//! Only one combination is blocked: a pure black logo on a pure black upper.
//! The check runs before a part color is merged into the store; the store
//! itself accepts anything, and AI suggestions are applied without it.

use crate::configuration::{Part, SneakerConfiguration};
use crate::types::HexColor;

/// A part change that would make the logo invisible.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastViolation {
    #[error("Cannot use black logo on black upper - it won't be visible!")]
    BlackLogoOnBlackUpper,

    #[error("Cannot use black upper with black logo - logo won't be visible!")]
    BlackUpperUnderBlackLogo,
}

/// Check whether setting `part` to `color` on `current` is allowed.
///
/// # Errors
///
/// Returns the matching [`ContrastViolation`] when the change would leave
/// both logo and upper at `#000000`.
pub fn check_part_color(
    current: &SneakerConfiguration,
    part: Part,
    color: &HexColor,
) -> Result<(), ContrastViolation> {
    if !color.is_black() {
        return Ok(());
    }
    match part {
        Part::Logo if current.upper.is_black() => Err(ContrastViolation::BlackLogoOnBlackUpper),
        Part::Upper if current.logo.is_black() => Err(ContrastViolation::BlackUpperUnderBlackLogo),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(upper: &str, logo: &str) -> SneakerConfiguration {
        SneakerConfiguration {
            upper: HexColor::parse(upper).unwrap(),
            logo: HexColor::parse(logo).unwrap(),
            ..SneakerConfiguration::builtin_default()
        }
    }

    #[test]
    fn test_black_logo_on_black_upper_rejected() {
        let current = config("#000000", "#00a8ff");
        assert_eq!(
            check_part_color(&current, Part::Logo, &HexColor::black()),
            Err(ContrastViolation::BlackLogoOnBlackUpper)
        );
    }

    #[test]
    fn test_black_upper_under_black_logo_rejected() {
        let current = config("#ffffff", "#000000");
        assert_eq!(
            check_part_color(&current, Part::Upper, &HexColor::black()),
            Err(ContrastViolation::BlackUpperUnderBlackLogo)
        );
    }

    #[test]
    fn test_near_black_allowed() {
        let current = config("#000000", "#00a8ff");
        let near_black = HexColor::parse("#1a1a1a").unwrap();
        assert!(check_part_color(&current, Part::Logo, &near_black).is_ok());
    }

    #[test]
    fn test_other_parts_unaffected() {
        let current = config("#000000", "#000000");
        assert!(check_part_color(&current, Part::Sole, &HexColor::black()).is_ok());
        assert!(check_part_color(&current, Part::Laces, &HexColor::black()).is_ok());
    }

    #[test]
    fn test_black_logo_on_white_upper_allowed() {
        let current = config("#ffffff", "#00a8ff");
        assert!(check_part_color(&current, Part::Logo, &HexColor::black()).is_ok());
    }
}
