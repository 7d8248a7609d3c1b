//! 文档存储访问层
//!
//! 以集合为单位存取文档，每个文档由存储分配的字符串标识符寻址。
//! 提供两种实现：
//! - `PgDocumentStore`：PostgreSQL 中的 JSONB 文档集合
//! - `InMemoryStore`：进程内集合，用于本地运行和测试

pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use postgres::PgDocumentStore;

/// 可存入文档集合的实体
///
/// 实体的序列化形式即文档正文，标识符单独保存，不进入正文。
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// 集合名称
    const COLLECTION: &'static str;

    /// 已保存的实体返回其标识符，尚未保存时返回 `None`
    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);
}

/// 通用文档仓库
#[async_trait]
pub trait Repository<T: Document>: Send + Sync {
    /// 按集合的自然顺序返回全部文档
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// 标识符未知或无法解析时返回 `None`
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// 没有标识符时由存储生成一个；已有标识符时覆盖同标识符的文档（upsert）
    async fn save(&self, entity: T) -> Result<T, StoreError>;

    /// 清空集合，返回删除的文档数
    async fn delete_all(&self) -> Result<u64, StoreError>;
}
