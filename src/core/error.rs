//! 核心错误处理模块
//!
//! 服务层与存储层的错误原样向上传递，只在这里转换成 HTTP 状态码。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::infrastructure::store::StoreError;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    /// 请求体无法解码
    BadRequest(String),
    NotFound(String),
    Store(StoreError),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Store(err) if err.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            CoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Store(err)
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, message) = match self {
            CoreError::BadRequest(msg) => ("BAD_REQUEST", msg),
            CoreError::NotFound(msg) => ("NOT_FOUND", msg),
            CoreError::Store(err) => {
                error!("Document store error: {}", err);
                if err.is_unavailable() {
                    ("SERVICE_UNAVAILABLE", "Document store unavailable".to_string())
                } else {
                    ("INTERNAL_SERVER_ERROR", "Internal server error".to_string())
                }
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}
