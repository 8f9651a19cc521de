//! 进程内存储
//!
//! 不依赖数据库，记录每一次 `create` 调用，可切换为写入总是失败，
//! 用于测试和本地开发。

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use crate::app::calculator::{
    model::{ArithmeticRequest, NewArithmeticRequest},
    repository::{RequestStore, StoreError},
};

#[derive(Default)]
pub struct InMemoryRequestStore {
    calls: Mutex<Vec<NewArithmeticRequest>>,
    records: Mutex<Vec<ArithmeticRequest>>,
    fail_writes: AtomicBool,
}

// 持锁期间不会 panic，锁中毒时仍然读取已有数据
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 之后的所有写入都返回 `StoreError::Unavailable`
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 按调用顺序返回所有 `create` 调用的参数，包括失败的调用
    pub fn calls(&self) -> Vec<NewArithmeticRequest> {
        lock(&self.calls).clone()
    }

    /// 已成功写入的记录
    pub fn records(&self) -> Vec<ArithmeticRequest> {
        lock(&self.records).clone()
    }
}

#[async_trait]
impl RequestStore for InMemoryRequestStore {
    async fn create(&self, request: NewArithmeticRequest) -> Result<ArithmeticRequest, StoreError> {
        lock(&self.calls).push(request);

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("内存存储已设置为写入失败".to_string()));
        }

        let mut records = lock(&self.records);
        let id = records.len() as i64 + 1;
        let record = ArithmeticRequest::from_new(id, request, Utc::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("内存存储不可用".to_string()));
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
