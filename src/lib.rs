//! # 计算记录服务
//!
//! 接收两个数字，执行求和或乘法，把请求和结果写入数据库并返回答案。
//!
//! - `app`：路由、处理器、校验和业务服务
//! - `core`：错误处理、响应结构、请求体提取和中间件
//! - `infrastructure`：存储后端和日志
//! - `config`：配置加载与校验

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{
    calculator::{
        handler::AppState,
        repository::{RequestStore, StoreError},
    },
    create_routes,
};
pub use config::AppConfig;
