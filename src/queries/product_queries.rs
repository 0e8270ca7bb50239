use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateProductRequest, Product, UpdateProductRequest},
};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn insert_product(
    pool: &PgPool,
    req: &CreateProductRequest,
    sku: &str,
) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (product_name, price, sku, description_text)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&req.product_name)
    .bind(req.price)
    .bind(sku)
    .bind(&req.description_text)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Merges the partial payload over the stored row. `sku` and `created_at`
/// are never touched; `updated_at` is refreshed by the statement itself.
pub async fn update_product(
    pool: &PgPool,
    id: i32,
    req: &UpdateProductRequest,
) -> Result<Option<Product>> {
    let Some(existing) = find_by_id(pool, id).await? else {
        return Ok(None);
    };

    // An absent description keeps the stored value; an explicit null clears it.
    let description = match &req.description_text {
        Some(value) => value.as_deref(),
        None => existing.description_text.as_deref(),
    };

    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET
            product_name = COALESCE($1, product_name),
            price = COALESCE($2, price),
            description_text = $3,
            updated_at = NOW()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(&req.product_name)
    .bind(req.price)
    .bind(description)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
