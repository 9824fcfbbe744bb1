//! Newtype wrappers for Solecraft domain values.
//!
//! Each type validates on construction, so holding one is proof the value is
//! well-formed.

pub mod color;
pub mod id;
pub mod material;
pub mod price;
pub mod text;

pub use color::{HEX_COLOR_PATTERN, HexColor, HexColorError};
pub use id::*;
pub use material::Material;
pub use price::Price;
pub use text::{CustomText, CustomTextError};
