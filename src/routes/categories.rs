use axum::{Json, extract::State, http::StatusCode};
use sqlx::Connection;

use crate::{
    AppState, database,
    error::{AppError, Result},
    models::{Category, CategoryCreated, CategoryRequest, MessageResponse},
    queries::category_queries,
    utils::extractors::{AppJson, AppPath},
};

const NOT_FOUND: &str = "Category not found.";

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryCreated>)> {
    const FAILED: &str = "Failed to create category.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;
    let mut tx = conn.begin().await.map_err(AppError::database(FAILED))?;

    let category_id = match category_queries::create(&mut *tx, &payload).await {
        Ok(id) => id,
        Err(e) => {
            database::rollback(tx).await;
            return Err(AppError::database(FAILED)(e));
        }
    };

    tx.commit().await.map_err(AppError::database(FAILED))?;
    tracing::info!("Created category {}", category_id);

    Ok((
        StatusCode::CREATED,
        Json(CategoryCreated {
            message: "Category created successfully!".to_string(),
            category_id,
        }),
    ))
}

pub async fn get_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    const FAILED: &str = "Failed to get categories.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;

    let categories = category_queries::find_all(&mut *conn)
        .await
        .map_err(AppError::database(FAILED))?;

    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Category>> {
    const FAILED: &str = "Failed to get category.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;

    let category = category_queries::find_by_id(&mut *conn, id)
        .await
        .map_err(AppError::database(FAILED))?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<CategoryRequest>,
) -> Result<Json<MessageResponse>> {
    const FAILED: &str = "Failed to update category.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;
    let mut tx = conn.begin().await.map_err(AppError::database(FAILED))?;

    match category_queries::update(&mut *tx, id, &payload).await {
        Ok(0) => {
            database::rollback(tx).await;
            Err(AppError::NotFound(NOT_FOUND.to_string()))
        }
        Ok(_) => {
            tx.commit().await.map_err(AppError::database(FAILED))?;
            tracing::info!("Updated category {}", id);
            Ok(Json(MessageResponse::new("Category updated successfully!")))
        }
        Err(e) => {
            database::rollback(tx).await;
            Err(AppError::database(FAILED)(e))
        }
    }
}

pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    const FAILED: &str = "Failed to delete category.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;
    let mut tx = conn.begin().await.map_err(AppError::database(FAILED))?;

    match category_queries::delete(&mut *tx, id).await {
        Ok(0) => {
            database::rollback(tx).await;
            Err(AppError::NotFound(NOT_FOUND.to_string()))
        }
        Ok(_) => {
            tx.commit().await.map_err(AppError::database(FAILED))?;
            tracing::info!("Deleted category {}", id);
            Ok(Json(MessageResponse::new("Category deleted successfully!")))
        }
        Err(e) => {
            database::rollback(tx).await;
            Err(AppError::database(FAILED)(e))
        }
    }
}
