//! 商品 API 路由

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tienda_errors::{AppError, AppResult};
use tracing::info;

use crate::domain::product::{Product, ProductId, ProductRepository};

/// 共享状态
///
/// 处理器本身无状态，仓储通过构造注入
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ProductRepository>,
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

/// Get/Update 未命中时的响应
///
/// 缺失的商品返回 200 空响应体，而不是 404（Delete 例外，见 delete_product）
pub struct MaybeProduct(pub Option<Product>);

impl IntoResponse for MaybeProduct {
    fn into_response(self) -> Response {
        match self.0 {
            Some(product) => Json(product).into_response(),
            None => StatusCode::OK.into_response(),
        }
    }
}

/// GET /api/products
async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.repo.find_all().await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<MaybeProduct> {
    let product = state.repo.find_by_id(id).await?;
    Ok(MaybeProduct(product))
}

/// POST /api/products
async fn create_product(
    State(state): State<AppState>,
    Json(mut payload): Json<Product>,
) -> AppResult<(StatusCode, Json<Product>)> {
    // 载荷中的 id 一律忽略，由存储分配
    payload.id = None;
    let saved = state.repo.save(&payload).await?;

    info!(id = ?saved.id, "Product created");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /api/products/{id}
///
/// 整行覆盖 name/description/price/quantity，id 不可变更
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<Product>,
) -> AppResult<MaybeProduct> {
    match state.repo.find_by_id(id).await? {
        Some(mut existing) => {
            existing.overwrite_with(payload);
            let updated = state.repo.save(&existing).await?;

            info!(%id, "Product updated");
            Ok(MaybeProduct(Some(updated)))
        }
        None => Ok(MaybeProduct(None)),
    }
}

/// DELETE /api/products/{id}
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<StatusCode> {
    if !state.repo.exists_by_id(id).await? {
        return Err(AppError::not_found("Product not found"));
    }

    state.repo.delete_by_id(id).await?;
    info!(%id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
