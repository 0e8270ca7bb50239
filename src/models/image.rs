use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    #[serde(flatten)]
    pub image: ProductImage,
    pub url: String,
}
