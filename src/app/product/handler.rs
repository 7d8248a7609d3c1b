//! 产品处理器

use axum::{extract::State, http::StatusCode, response::Json};

use super::{
    dto::{ProductRequest, ProductResponse},
    service::ProductService,
};
use crate::core::{error::CoreError, extract::JsonBody};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, CoreError> {
    let products = state.product_service.get_all_products().await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), CoreError> {
    let product = state.product_service.save_product(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
