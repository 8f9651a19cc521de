//! 计算器应用：求和与乘法，并记录每一次请求

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod validator;
