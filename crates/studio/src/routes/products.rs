//! Product catalogue.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use solecraft_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list))
        .route("/api/products/default", get(default_product))
        .route("/api/products/{id}", get(show))
}

/// All products, in catalogue order.
///
/// # Errors
///
/// Returns an error if the catalogue cannot be read.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products().list().await?))
}

/// The product the customizer opens with.
///
/// # Errors
///
/// 404 if the catalogue is empty.
pub async fn default_product(State(state): State<AppState>) -> Result<Json<Product>> {
    state
        .products()
        .first()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
}

/// One product by id.
///
/// # Errors
///
/// 400 for a malformed id, 404 if there is no such product.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id: ProductId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product id".to_string()))?;

    state
        .products()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
}
