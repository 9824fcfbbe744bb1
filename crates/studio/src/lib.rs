//! Solecraft Studio library.
//!
//! The HTTP service behind the sneaker customizer, as a library so the
//! binary, the CLI and the integration tests share one router.
//!
//! - [`routes::app`] builds the full application for a given [`state::AppState`]
//! - [`db::Storage`] selects `PostgreSQL` or in-memory repositories
//! - [`services::Designer`] is the AI suggestion gateway

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod gemini;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
