//! 产品接口的请求与响应结构

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 创建产品请求，客户端不能提供标识符
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub sku_code: String,
    #[serde(with = "super::price")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sku_code: String,
    #[serde(with = "super::price")]
    pub price: Decimal,
}
