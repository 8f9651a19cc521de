//! 数据库基础设施
//!
//! 根据连接串选择存储后端，并在启动时按需建表。

use std::sync::Arc;
use tracing::info;

use super::memory::InMemoryRequestStore;
use crate::app::calculator::repository::{RequestStore, StoreError};
use crate::config::{redact_url, DatabaseConfig, DbKind};

#[cfg(feature = "database")]
use super::{postgres::PgRequestStore, sqlite::SqliteRequestStore};
#[cfg(feature = "database")]
use crate::app::calculator::model::{ArithmeticRequest, Operation};
#[cfg(feature = "database")]
use chrono::{DateTime, Utc};

pub struct DatabaseManager {
    store: Arc<dyn RequestStore>,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let kind = config
            .kind()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        info!("连接存储: {}", redact_url(&config.url));

        let store: Arc<dyn RequestStore> = match kind {
            DbKind::Memory => Arc::new(InMemoryRequestStore::new()),
            #[cfg(feature = "database")]
            DbKind::Postgres => Arc::new(PgRequestStore::new(config).await?),
            #[cfg(feature = "database")]
            DbKind::Sqlite => Arc::new(SqliteRequestStore::new(config).await?),
            #[cfg(not(feature = "database"))]
            DbKind::Postgres | DbKind::Sqlite => {
                return Err(StoreError::Unavailable(
                    "未启用 database feature，无法连接 SQL 数据库".to_string(),
                ))
            }
        };

        if config.run_migrations {
            store.run_migrations().await?;
            info!("{} 存储建表完成", store.backend());
        }

        Ok(Self { store })
    }

    pub fn store(&self) -> Arc<dyn RequestStore> {
        Arc::clone(&self.store)
    }
}

/// `requests` 表中的一行
#[cfg(feature = "database")]
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct RequestRow {
    pub id: i64,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    #[sqlx(rename = "type")]
    pub operation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "database")]
impl TryFrom<RequestRow> for ArithmeticRequest {
    type Error = StoreError;

    fn try_from(row: RequestRow) -> Result<Self, Self::Error> {
        let operation: Operation = row.operation.parse().map_err(StoreError::InvalidRecord)?;
        Ok(ArithmeticRequest {
            id: row.id,
            a: row.a,
            b: row.b,
            result: row.result,
            operation,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
