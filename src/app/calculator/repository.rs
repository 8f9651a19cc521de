//! 计算请求持久化接口

use async_trait::async_trait;

use super::model::{ArithmeticRequest, NewArithmeticRequest};

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("存储不可用: {0}")]
    Unavailable(String),
    #[error("无效的记录: {0}")]
    InvalidRecord(String),
}

/// 计算请求存储
///
/// 只追加写入，不读取也不修改已有记录。每次成功的 `create` 都返回一个
/// 此前未分配过的 `id`。失败只尝试一次，错误原样向上传递。
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// 写入一条新记录并返回完整的已存储记录
    async fn create(&self, request: NewArithmeticRequest) -> Result<ArithmeticRequest, StoreError>;

    /// 检查存储是否可达
    async fn ping(&self) -> Result<(), StoreError>;

    /// 建表，默认无操作
    async fn run_migrations(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// 后端名称，用于日志和健康检查
    fn backend(&self) -> &'static str;
}
