use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{ProductImage, ProductResponse},
    queries::{image_queries, product_queries},
    services::image_service,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = product_queries::find_all(&state.db).await?;

    if products.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    let all_images = image_queries::find_by_product_ids(&state.db, &product_ids).await?;

    let mut images_map: HashMap<i32, Vec<ProductImage>> = HashMap::new();
    for image in all_images {
        images_map.entry(image.product_id).or_default().push(image);
    }

    let responses = products
        .into_iter()
        .map(|product| {
            let image_urls = images_map
                .remove(&product.id)
                .unwrap_or_default()
                .into_iter()
                .map(|image| image_service::resolve_url(&state.media.base_url, &image.filename))
                .collect();

            ProductResponse {
                product,
                image_urls,
            }
        })
        .collect();

    Ok(Json(responses))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    let image_urls = image_queries::find_by_product_id(&state.db, id)
        .await?
        .into_iter()
        .map(|image| image_service::resolve_url(&state.media.base_url, &image.filename))
        .collect();

    Ok(Json(ProductResponse {
        product,
        image_urls,
    }))
}
