//! 请求/响应结构与产品实体之间的转换

use super::dto::{ProductRequest, ProductResponse};
use super::model::Product;

/// 请求 → 实体，标识符留空等待存储分配
pub fn to_product(request: &ProductRequest) -> Product {
    Product::new(
        request.name.clone(),
        request.description.clone(),
        request.sku_code.clone(),
        request.price,
    )
}

/// 实体 → 响应，尚未保存的实体得到空标识符
pub fn to_product_response(product: &Product) -> ProductResponse {
    ProductResponse {
        id: product.id.clone().unwrap_or_default(),
        name: product.name.clone(),
        description: product.description.clone(),
        sku_code: product.sku_code.clone(),
        price: product.price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn request() -> ProductRequest {
        ProductRequest {
            name: "iPhone 18".to_string(),
            description: "Smartphone de Apple".to_string(),
            sku_code: "p-001".to_string(),
            price: Decimal::from_str("2000.50").unwrap(),
        }
    }

    #[test]
    fn test_to_product_leaves_id_unset() {
        let product = to_product(&request());
        assert_eq!(product.id, None);
        assert_eq!(product.name, "iPhone 18");
        assert_eq!(product.sku_code, "p-001");
        assert_eq!(product.price, Decimal::from_str("2000.50").unwrap());
    }

    #[test]
    fn test_round_trip_keeps_fields() {
        let req = request();
        let response = to_product_response(&to_product(&req));

        assert_eq!(response.id, "");
        assert_eq!(response.name, req.name);
        assert_eq!(response.description, req.description);
        assert_eq!(response.sku_code, req.sku_code);
        assert_eq!(response.price, req.price);
    }

    #[test]
    fn test_response_carries_id() {
        let mut product = to_product(&request());
        product.id = Some("abc-123".to_string());

        assert_eq!(to_product_response(&product).id, "abc-123");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let req = request();
        assert_eq!(to_product(&req), to_product(&req));

        let product = to_product(&req);
        assert_eq!(to_product_response(&product), to_product_response(&product));
    }

    #[test]
    fn test_price_scale_is_preserved() {
        let mut req = request();
        req.price = Decimal::from_str("0.10").unwrap();

        let response = to_product_response(&to_product(&req));
        assert_eq!(response.price.to_string(), "0.10");
    }
}
