//! 产品数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::infrastructure::store::Document;

/// 产品实体，对应 `products` 集合中的一个文档
///
/// 标识符由存储在首次保存时分配，不写入文档正文。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub sku_code: String,
    #[serde(with = "super::price")]
    pub price: Decimal,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        sku_code: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            sku_code: sku_code.into(),
            price,
        }
    }
}

impl Document for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_document_body_holds_numeric_price() {
        let product = Product::new("iPhone 18", "d", "p-001", Decimal::from(2000));

        let body = serde_json::to_value(&product).unwrap();
        assert!(body["price"].is_number());
        assert_eq!(body["skuCode"], "p-001");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_document_body_round_trip() {
        let product = Product::new("Cable", "USB-C", "c-1", Decimal::from_str("19.90").unwrap());

        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains(r#""price":19.90"#));

        let restored: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, product);
        assert_eq!(restored.price.to_string(), "19.90");
    }
}
