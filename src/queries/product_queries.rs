use sqlx::postgres::PgExecutor;

use crate::models::{Product, ProductRequest};

pub async fn create<'e>(executor: impl PgExecutor<'e>, req: &ProductRequest) -> sqlx::Result<i32> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO products (name, description, price, image_url, category_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(&req.image_url)
    .bind(req.category_id)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// Rows come back in the store's natural order.
pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> sqlx::Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image_url, category_id, created_at, updated_at
         FROM products",
    )
    .fetch_all(executor)
    .await?;

    Ok(products)
}

pub async fn find_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> sqlx::Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image_url, category_id, created_at, updated_at
         FROM products
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(product)
}

/// Replaces every mutable field and stamps `updated_at`. Returns the affected-row count.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
    req: &ProductRequest,
) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET
            name = $1,
            description = $2,
            price = $3,
            image_url = $4,
            category_id = $5,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $6
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(&req.image_url)
    .bind(req.category_id)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: i32) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
