//! Product CRUD API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use rekhali_core::{ProductId, Slug};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{NewProduct, Product, ProductUpdate};
use crate::state::AppState;

/// List all products, newest first.
///
/// GET /api/products
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Get a single product by id.
///
/// GET /api/products/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}

/// Create a product. The slug is derived from the name server-side.
///
/// POST /api/products
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(candidate): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let valid = candidate.validate()?;
    let product = ProductRepository::new(state.pool()).create(&valid).await?;

    tracing::info!(product_id = %product.id, slug = %product.slug, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product. Body carries the id plus changed fields.
///
/// PUT /api/products
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    let ProductUpdate { id, changes } = update;

    if changes.is_empty() {
        return Err(AppError::Validation("no fields to update".to_string()));
    }
    changes.validate()?;

    // A renamed product gets a freshly derived slug
    let new_slug = changes
        .name
        .as_deref()
        .map(Slug::derive)
        .transpose()
        .map_err(|e| AppError::Validation(format!("name is unusable: {e}")))?;

    let product = ProductRepository::new(state.pool())
        .update(id, &changes, new_slug.as_ref())
        .await?;

    tracing::info!(product_id = %product.id, "product updated");
    Ok(Json(product))
}

/// Query parameters for delete.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: ProductId,
}

/// Delete a product. Idempotent: unknown ids report success too.
///
/// DELETE /api/products?id=...
pub async fn destroy(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool()).delete(params.id).await?;

    tracing::info!(product_id = %params.id, "product deleted");
    Ok(Json(json!({ "success": true })))
}
