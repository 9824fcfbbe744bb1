//! HTTP middleware for the studio.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. CORS (permissive; answers preflight, headers on every response)
//! 3. `TraceLayer` (request span with a `request_id` field)
//! 4. Request ID (read or generate `x-request-id`)
//!
//! Owner identity is an extractor ([`owner::RequireOwner`]), not a layer, so
//! public routes stay open.

pub mod owner;
pub mod request_id;

use axum::http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

pub use owner::{RequireOwner, USER_ID_HEADER};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};

/// Headers browsers may send cross-origin.
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// Permissive CORS: any origin, the fixed allow-header list.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static))
}
