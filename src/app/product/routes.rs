//! 产品路由表

use axum::{routing::get, Router};

use super::handler::{create_product, list_products, AppState};
use super::service::ProductService;

pub const PRODUCTS_PATH: &str = "/api/v1/products";

pub fn router(product_service: ProductService) -> Router {
    let state = AppState { product_service };

    Router::new()
        .route(PRODUCTS_PATH, get(list_products).post(create_product))
        .with_state(state)
}
