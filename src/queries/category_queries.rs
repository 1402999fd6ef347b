use sqlx::postgres::PgExecutor;

use crate::models::{Category, CategoryRequest};

pub async fn create<'e>(executor: impl PgExecutor<'e>, req: &CategoryRequest) -> sqlx::Result<i32> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO categories (name, description, image_url)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.image_url)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

pub async fn find_all<'e>(executor: impl PgExecutor<'e>) -> sqlx::Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, description, image_url, created_at, updated_at FROM categories",
    )
    .fetch_all(executor)
    .await?;

    Ok(categories)
}

pub async fn find_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> sqlx::Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, description, image_url, created_at, updated_at
         FROM categories
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(category)
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
    req: &CategoryRequest,
) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE categories
        SET
            name = $1,
            description = $2,
            image_url = $3,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $4
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.image_url)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Products pointing at the category are left to the store's foreign key.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: i32) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
