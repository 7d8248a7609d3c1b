//! 存储错误类型

/// 文档存储错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// 连接、连接池或网络层面的失败
    #[error("document store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    /// 其余驱动错误，包括文档解码失败
    #[error("document store query failed: {0}")]
    Query(#[source] sqlx::Error),
    /// 后端无法表示的标识符
    #[error("invalid document identifier: {0}")]
    InvalidIdentifier(String),
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err),
            other => StoreError::Query(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(StoreError::from(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(StoreError::from(sqlx::Error::PoolClosed).is_unavailable());
    }

    #[test]
    fn test_row_errors_are_query_failures() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Query(_)));
        assert!(!err.is_unavailable());
    }
}
