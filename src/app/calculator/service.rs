//! 计算器业务服务

use std::sync::Arc;
use tracing::info;

use super::model::{ArithmeticRequest, NewArithmeticRequest, Operands, Operation};
use super::repository::{RequestStore, StoreError};

#[derive(Clone)]
pub struct CalculatorService {
    store: Arc<dyn RequestStore>,
}

impl CalculatorService {
    pub fn new(store: Arc<dyn RequestStore>) -> Self {
        Self { store }
    }

    pub async fn sum(&self, operands: Operands) -> Result<ArithmeticRequest, StoreError> {
        self.compute(operands, Operation::Sum).await
    }

    pub async fn multiply(&self, operands: Operands) -> Result<ArithmeticRequest, StoreError> {
        self.compute(operands, Operation::Multiply).await
    }

    /// 计算结果并写入一条记录
    pub async fn compute(
        &self,
        operands: Operands,
        operation: Operation,
    ) -> Result<ArithmeticRequest, StoreError> {
        let request = NewArithmeticRequest::new(operands, operation);
        let record = self.store.create(request).await?;

        info!(
            id = record.id,
            operation = %record.operation,
            a = record.a,
            b = record.b,
            result = record.result,
            "已记录计算请求"
        );

        Ok(record)
    }

    pub async fn health(&self) -> Result<&'static str, StoreError> {
        self.store.ping().await?;
        Ok(self.store.backend())
    }
}
