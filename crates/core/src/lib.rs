//! Solecraft Core - domain types and design logic.
//!
//! Shared by every Solecraft component:
//! - `studio` - HTTP service (AI designer gateway, products, saved designs)
//! - `client` - typed API client and the customizer session
//! - `cli` - command-line tools for migrations, seeding and previews
//!
//! # Architecture
//!
//! No I/O lives here: no database access, no HTTP. The optional `postgres`
//! feature only adds `sqlx` encode/decode impls for the newtypes.
//!
//! # Modules
//!
//! - [`types`] - validated newtypes (ids, prices, colors, material, text)
//! - [`configuration`] - the sneaker configuration and partial patches
//! - [`store`] - the design state store
//! - [`scheme`] and [`reply`] - turning model output into a color scheme
//! - [`guard`] - black-on-black contrast check
//! - [`gate`] - at-most-one in-flight call per action
//! - [`preview`] - SVG rendering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod configuration;
pub mod design;
pub mod gate;
pub mod guard;
pub mod preview;
pub mod product;
pub mod prompts;
pub mod reply;
pub mod scheme;
pub mod store;
pub mod types;

pub use configuration::{ConfigurationPatch, Part, SneakerConfiguration};
pub use design::{DesignName, DesignNameError, NewDesign, SavedDesign, TagSet};
pub use gate::{GateState, InFlightGate, InFlightToken};
pub use guard::{ContrastViolation, check_part_color};
pub use preview::{RenderError, render_svg};
pub use product::Product;
pub use scheme::{ColorScheme, REQUIRED_PARTS, SchemeError, validate_scheme};
pub use store::DesignStore;
pub use types::*;
