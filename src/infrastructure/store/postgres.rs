//! PostgreSQL 文档集合
//!
//! 每个集合对应一张表：
//! `id UUID PRIMARY KEY`（由数据库生成）、`body JSONB`（文档正文）、`created_at`。
//! JSONB 数值按精确十进制保存，价格不会经过二进制浮点。

use async_trait::async_trait;
use sqlx::{postgres::PgPool, types::Json};
use std::marker::PhantomData;
use tracing::{debug, info};
use uuid::Uuid;

use super::{Document, Repository, StoreError};

pub struct PgDocumentStore<T> {
    pool: PgPool,
    _document: PhantomData<fn() -> T>,
}

impl<T> Clone for PgDocumentStore<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _document: PhantomData,
        }
    }
}

impl<T: Document> PgDocumentStore<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _document: PhantomData,
        }
    }

    /// 集合表不存在时创建
    pub async fn ensure_collection(&self) -> Result<(), StoreError> {
        info!(collection = T::COLLECTION, "Ensuring document collection exists");

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                body JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            T::COLLECTION
        ))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert(&self, mut entity: T) -> Result<T, StoreError> {
        let id: Uuid = sqlx::query_scalar(&format!(
            "INSERT INTO {} (body) VALUES ($1) RETURNING id",
            T::COLLECTION
        ))
        .bind(Json(&entity))
        .fetch_one(&self.pool)
        .await?;

        entity.set_id(id.to_string());
        Ok(entity)
    }

    async fn upsert(&self, id: Uuid, mut entity: T) -> Result<T, StoreError> {
        sqlx::query(&format!(
            "INSERT INTO {} (id, body) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET body = EXCLUDED.body",
            T::COLLECTION
        ))
        .bind(id)
        .bind(Json(&entity))
        .execute(&self.pool)
        .await?;

        // 统一为 find_all/find_by_id 返回的小写形式
        entity.set_id(id.to_string());
        Ok(entity)
    }
}

#[async_trait]
impl<T: Document> Repository<T> for PgDocumentStore<T> {
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let rows: Vec<(Uuid, Json<T>)> = sqlx::query_as(&format!(
            "SELECT id, body FROM {} ORDER BY created_at, id",
            T::COLLECTION
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(collection = T::COLLECTION, count = rows.len(), "Loaded documents");

        Ok(rows
            .into_iter()
            .map(|(id, Json(mut entity))| {
                entity.set_id(id.to_string());
                entity
            })
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row: Option<(Json<T>,)> = sqlx::query_as(&format!(
            "SELECT body FROM {} WHERE id = $1",
            T::COLLECTION
        ))
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(mut entity),)| {
            entity.set_id(uuid.to_string());
            entity
        }))
    }

    async fn save(&self, entity: T) -> Result<T, StoreError> {
        match entity.id().filter(|id| !id.is_empty()) {
            None => self.insert(entity).await,
            Some(id) => {
                let uuid = Uuid::parse_str(id)
                    .map_err(|_| StoreError::InvalidIdentifier(id.to_string()))?;
                self.upsert(uuid, entity).await
            }
        }
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query(&format!("DELETE FROM {}", T::COLLECTION))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
