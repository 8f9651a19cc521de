//! 核心层：错误处理、响应结构、请求体提取和中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
