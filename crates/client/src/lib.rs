//! Client side of the Solecraft studio.
//!
//! - [`ApiClient`] - typed calls to the studio HTTP API.
//! - [`Customizer`] - a session owning the active design, with one
//!   in-flight gate per asynchronous action.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod customizer;
pub mod error;

pub use api::{ApiClient, USER_ID_HEADER};
pub use customizer::Customizer;
pub use error::{Action, ClientError, CustomizerError};
