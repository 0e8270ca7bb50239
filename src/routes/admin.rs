use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        CreateProductRequest, DeleteProductResponse, ProductResponse, UpdateProductRequest,
        generate_sku,
    },
    queries::{image_queries, product_queries},
    services::{image_service, inventory_service},
};

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<ProductResponse>> {
    if payload.product_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "product_name must not be empty".to_string(),
        ));
    }

    let sku = generate_sku(&payload.product_name);
    let product = product_queries::insert_product(&state.db, &payload, &sku).await?;

    tracing::info!("Created product {} with SKU {}", product.id, product.sku);

    // The row above is already committed: a failed notification surfaces
    // as 502 while the product stays in the store.
    inventory_service::notify_created(&product.sku, payload.quantity.unwrap_or(0)).await?;

    Ok(Json(ProductResponse {
        product,
        image_urls: Vec::new(),
    }))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    let product = product_queries::update_product(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    let image_urls = image_queries::find_by_product_id(&state.db, id)
        .await?
        .into_iter()
        .map(|image| image_service::resolve_url(&state.media.base_url, &image.filename))
        .collect();

    tracing::info!("Updated product {}", id);

    Ok(Json(ProductResponse {
        product,
        image_urls,
    }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteProductResponse>> {
    let deleted = product_queries::delete_product(&state.db, id).await?;

    if deleted == 0 {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    tracing::info!("Deleted product {}", id);

    Ok(Json(DeleteProductResponse {
        message: "Product deleted".to_string(),
        id,
    }))
}
