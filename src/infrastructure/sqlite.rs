//! SQLite 存储

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use super::database::RequestRow;
use crate::app::calculator::{
    model::{ArithmeticRequest, NewArithmeticRequest},
    repository::{RequestStore, StoreError},
};
use crate::config::DatabaseConfig;

pub struct SqliteRequestStore {
    pool: SqlitePool,
}

/// 只有 `sqlite::memory:` 和空路径表示内存数据库，其他路径都是文件
fn is_memory_url(url: &str) -> bool {
    match url.trim().strip_prefix("sqlite:") {
        Some(rest) => {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            path.is_empty() || path == ":memory:"
        }
        None => false,
    }
}

impl SqliteRequestStore {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let in_memory = is_memory_url(&config.url);
        let url = if in_memory {
            "sqlite::memory:"
        } else {
            config.url.trim()
        };

        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // 内存数据库随连接销毁，只保留一个常驻连接
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl RequestStore for SqliteRequestStore {
    async fn create(&self, request: NewArithmeticRequest) -> Result<ArithmeticRequest, StoreError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, RequestRow>(
            r#"
            INSERT INTO requests (a, b, result, type, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING id, a, b, result, type, created_at, updated_at
            "#,
        )
        .bind(request.a)
        .bind(request.b)
        .bind(request.result)
        .bind(request.operation.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                a REAL NOT NULL,
                b REAL NOT NULL,
                result REAL NOT NULL,
                type TEXT NOT NULL CHECK (type IN ('SUM', 'MULTIPLY')),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
