use axum::{
    Json,
    extract::{Multipart, Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::ImageUploadResponse,
    queries::{image_queries, product_queries},
    services::image_service,
};

pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<Json<ImageUploadResponse>> {
    // The product must exist before anything touches the disk.
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    let mut file_field = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.content_type().is_some() {
            let content_type = field
                .content_type()
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::BadRequest("Upload is missing a content type".to_string())
                })?;

            if !image_service::is_accepted_image_type(&content_type) {
                return Err(AppError::BadRequest(format!(
                    "Unsupported image type: {}",
                    content_type
                )));
            }

            let original_name = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

            file_field = Some((content_type, original_name, data));
            break;
        }
    }

    let (content_type, original_name, data) =
        file_field.ok_or_else(|| AppError::BadRequest("A file part is required".to_string()))?;

    let filename = image_service::unique_filename(original_name.as_deref(), &content_type);
    image_service::store_file(&state.media.upload_dir, &filename, &data).await?;

    // The write and the insert are separate steps; if the insert fails the
    // file is removed again so no orphan stays behind.
    let image = match image_queries::insert_image(&state.db, id, &filename).await {
        Ok(image) => image,
        Err(e) => {
            let path = state.media.upload_dir.join(&filename);
            if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                tracing::error!(
                    "Failed to remove orphaned upload {}: {}",
                    path.display(),
                    remove_err
                );
            }
            return Err(e);
        }
    };
    let url = image_service::resolve_url(&state.media.base_url, &image.filename);

    tracing::info!("Attached image {} to product {}", image.filename, id);

    Ok(Json(ImageUploadResponse { image, url }))
}
