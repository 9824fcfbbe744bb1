//! Saved designs, scoped to the calling owner.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;

use solecraft_core::{
    DesignId, DesignName, NewDesign, ProductId, SavedDesign, SneakerConfiguration, TagSet,
};

use crate::error::{AppError, Result};
use crate::middleware::RequireOwner;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/designs", get(list).post(create))
        .route("/api/designs/{id}", delete(remove))
}

/// Query string for listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive match against name and tags.
    #[serde(default)]
    pub q: Option<String>,
}

/// Request body for saving a design.
#[derive(Debug, Deserialize)]
pub struct CreateDesignRequest {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    pub configuration: SneakerConfiguration,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The owner's designs, newest first, optionally filtered.
///
/// # Errors
///
/// Returns an error if storage fails.
pub async fn list(
    RequireOwner(owner): RequireOwner,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<SavedDesign>>> {
    let designs = state.designs().list_for_owner(owner).await?;
    let needle = query.q.as_deref().unwrap_or_default();

    Ok(Json(
        designs
            .into_iter()
            .filter(|d| d.matches_query(needle))
            .collect(),
    ))
}

/// Save a new design.
///
/// Without a `product_id` the design is attached to the default product.
///
/// # Errors
///
/// 400 for a blank name, an unknown product or an empty catalogue.
pub async fn create(
    RequireOwner(owner): RequireOwner,
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateDesignRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedDesign>)> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let name = DesignName::parse(&body.name).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let product = match body.product_id {
        Some(id) => state.products().get(id).await?,
        None => state.products().first().await?,
    }
    .ok_or_else(|| AppError::BadRequest("Unknown product".to_string()))?;

    let design = NewDesign {
        product_id: Some(product.id),
        name,
        configuration: body.configuration,
        tags: body.tags.iter().collect::<TagSet>(),
    };

    let saved = state.designs().insert(owner, product.id, design).await?;
    tracing::info!(design_id = %saved.id, product_id = %product.id, "Design saved");

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Delete one of the owner's designs.
///
/// # Errors
///
/// 404 if the design does not exist, was already deleted, or belongs to
/// someone else.
pub async fn remove(
    RequireOwner(owner): RequireOwner,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id: DesignId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid design id".to_string()))?;

    if state.designs().delete(owner, id).await? {
        tracing::info!(design_id = %id, "Design deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Design".to_string()))
    }
}
