//! 进程内文档集合

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, Repository, StoreError};

/// 按插入顺序保存文档的内存集合
pub struct InMemoryStore<T> {
    documents: RwLock<Vec<T>>,
}

impl<T: Document> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

impl<T: Document> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> Repository<T> for InMemoryStore<T> {
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| doc.id() == Some(id)).cloned())
    }

    async fn save(&self, mut entity: T) -> Result<T, StoreError> {
        let mut documents = self.documents.write().await;

        let id = match entity.id().filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                entity.set_id(id.clone());
                id
            }
        };

        match documents.iter_mut().find(|doc| doc.id() == Some(id.as_str())) {
            Some(existing) => *existing = entity.clone(),
            None => documents.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        let removed = documents.len() as u64;
        documents.clear();
        Ok(removed)
    }
}
