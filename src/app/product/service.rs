//! 产品业务服务

use std::sync::Arc;
use tracing::{info, Instrument, Span};

use super::dto::{ProductRequest, ProductResponse};
use super::mapper;
use super::model::Product;
use crate::infrastructure::store::{Repository, StoreError};

/// 无状态服务：映射后转交仓库，错误原样返回
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn Repository<Product>>,
    span: Span,
}

impl ProductService {
    /// `span` 是注入的日志上下文，服务的日志事件都记录在其中
    pub fn new(repository: Arc<dyn Repository<Product>>, span: Span) -> Self {
        Self { repository, span }
    }

    pub async fn get_all_products(&self) -> Result<Vec<ProductResponse>, StoreError> {
        async {
            info!("Fetching all products");
            let products = self.repository.find_all().await?;
            Ok::<Vec<_>, StoreError>(products.iter().map(mapper::to_product_response).collect())
        }
        .instrument(self.span.clone())
        .await
    }

    pub async fn save_product(&self, request: ProductRequest) -> Result<ProductResponse, StoreError> {
        async {
            let product = self.repository.save(mapper::to_product(&request)).await?;
            info!(
                id = product.id.as_deref().unwrap_or_default(),
                sku_code = %product.sku_code,
                "Product saved"
            );
            Ok::<_, StoreError>(mapper::to_product_response(&product))
        }
        .instrument(self.span.clone())
        .await
    }
}
