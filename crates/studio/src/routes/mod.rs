//! HTTP route handlers for the studio.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Liveness
//! GET    /health/ready            - Readiness (storage ping)
//!
//! # AI designer
//! POST   /api/ai-designer         - Prompt -> {"colors": {sole, upper, laces, logo}}
//!
//! # Products
//! GET    /api/products            - Catalogue
//! GET    /api/products/default    - Product the customizer opens with
//! GET    /api/products/{id}       - One product
//!
//! # Saved designs (x-user-id required)
//! GET    /api/designs?q=          - Owner's designs, newest first
//! POST   /api/designs             - Save a design (201)
//! DELETE /api/designs/{id}        - Delete a design (204, then 404)
//! ```

pub mod ai_designer;
pub mod designs;
pub mod health;
pub mod products;

use axum::{Router, middleware::from_fn};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, request_id_middleware};
use crate::state::AppState;

/// All routes, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(ai_designer::router())
        .merge(products::router())
        .merge(designs::router())
}

/// The full application: routes, state and the middleware stack.
///
/// Sentry layers are added on top of this in `main` so tests can use the
/// router without a Sentry client.
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .layer(cors_layer())
}
