use axum::{Json, extract::State, http::StatusCode};
use sqlx::Connection;

use crate::{
    AppState, database,
    error::{AppError, Result},
    models::{MessageResponse, ProductCreated, ProductRequest, ProductResponse},
    queries::product_queries,
    utils::extractors::{AppJson, AppPath},
};

const NOT_FOUND: &str = "Product not found.";

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductCreated>)> {
    const FAILED: &str = "Failed to create product.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;
    let mut tx = conn.begin().await.map_err(AppError::database(FAILED))?;

    let product_id = match product_queries::create(&mut *tx, &payload).await {
        Ok(id) => id,
        Err(e) => {
            database::rollback(tx).await;
            return Err(AppError::database(FAILED)(e));
        }
    };

    tx.commit().await.map_err(AppError::database(FAILED))?;
    tracing::info!("Created product {}", product_id);

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product created successfully!".to_string(),
            product_id,
        }),
    ))
}

pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    const FAILED: &str = "Failed to get products.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;

    let products = product_queries::find_all(&mut *conn)
        .await
        .map_err(AppError::database(FAILED))?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ProductResponse>> {
    const FAILED: &str = "Failed to get product.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;

    let product = product_queries::find_by_id(&mut *conn, id)
        .await
        .map_err(AppError::database(FAILED))?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(product.into()))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<Json<MessageResponse>> {
    const FAILED: &str = "Failed to update product.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;
    let mut tx = conn.begin().await.map_err(AppError::database(FAILED))?;

    match product_queries::update(&mut *tx, id, &payload).await {
        Ok(0) => {
            database::rollback(tx).await;
            Err(AppError::NotFound(NOT_FOUND.to_string()))
        }
        Ok(_) => {
            tx.commit().await.map_err(AppError::database(FAILED))?;
            tracing::info!("Updated product {}", id);
            Ok(Json(MessageResponse::new("Product updated successfully!")))
        }
        Err(e) => {
            database::rollback(tx).await;
            Err(AppError::database(FAILED)(e))
        }
    }
}

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    const FAILED: &str = "Failed to delete product.";

    let mut conn = database::acquire(&state.db)
        .await
        .ok_or_else(|| AppError::unavailable(FAILED))?;
    let mut tx = conn.begin().await.map_err(AppError::database(FAILED))?;

    match product_queries::delete(&mut *tx, id).await {
        Ok(0) => {
            database::rollback(tx).await;
            Err(AppError::NotFound(NOT_FOUND.to_string()))
        }
        Ok(_) => {
            tx.commit().await.map_err(AppError::database(FAILED))?;
            tracing::info!("Deleted product {}", id);
            Ok(Json(MessageResponse::new("Product deleted successfully!")))
        }
        Err(e) => {
            database::rollback(tx).await;
            Err(AppError::database(FAILED)(e))
        }
    }
}
