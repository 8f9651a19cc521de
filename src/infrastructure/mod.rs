//! 基础设施层：存储后端和日志

pub mod database;
pub mod logger;
pub mod memory;
#[cfg(feature = "database")]
pub mod postgres;
#[cfg(feature = "database")]
pub mod sqlite;
