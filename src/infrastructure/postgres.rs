//! PostgreSQL 存储

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::database::RequestRow;
use crate::app::calculator::{
    model::{ArithmeticRequest, NewArithmeticRequest},
    repository::{RequestStore, StoreError},
};
use crate::config::DatabaseConfig;

pub struct PgRequestStore {
    pool: PgPool,
}

impl PgRequestStore {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl RequestStore for PgRequestStore {
    async fn create(&self, request: NewArithmeticRequest) -> Result<ArithmeticRequest, StoreError> {
        let row = sqlx::query_as::<_, RequestRow>(
            r#"
            INSERT INTO requests (a, b, result, type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, a, b, result, type, created_at, updated_at
            "#,
        )
        .bind(request.a)
        .bind(request.b)
        .bind(request.result)
        .bind(request.operation.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // 创建表（生产环境应使用迁移工具）
    async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS requests (
                id BIGSERIAL PRIMARY KEY,
                a DOUBLE PRECISION NOT NULL,
                b DOUBLE PRECISION NOT NULL,
                result DOUBLE PRECISION NOT NULL,
                type TEXT NOT NULL CHECK (type IN ('SUM', 'MULTIPLY')),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
