//! 应用层：路由注册与各业务模块

pub mod product;

use axum::{http::Uri, middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use product::service::ProductService;

/// 组装完整的路由表
pub fn build_router(product_service: ProductService, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(product::routes::router(product_service))
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("No route for {}", uri.path()))
}
