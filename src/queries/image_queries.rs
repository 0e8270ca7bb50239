use sqlx::PgPool;

use crate::{error::Result, models::ProductImage};

pub async fn find_by_product_id(pool: &PgPool, product_id: i32) -> Result<Vec<ProductImage>> {
    let images = sqlx::query_as::<_, ProductImage>(
        "SELECT * FROM product_images WHERE product_id = $1 ORDER BY id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn find_by_product_ids(pool: &PgPool, product_ids: &[i32]) -> Result<Vec<ProductImage>> {
    let images = sqlx::query_as::<_, ProductImage>(
        "SELECT * FROM product_images WHERE product_id = ANY($1) ORDER BY product_id, id",
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn insert_image(pool: &PgPool, product_id: i32, filename: &str) -> Result<ProductImage> {
    let image = sqlx::query_as::<_, ProductImage>(
        r#"
        INSERT INTO product_images (product_id, filename)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(product_id)
    .bind(filename)
    .fetch_one(pool)
    .await?;

    Ok(image)
}
