//! 计算器处理器

use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use super::{repository::RequestStore, service::CalculatorService, validator::validate_operands};
use crate::core::{error::CoreError, extract::Payload, response::AnswerResponse};

#[derive(Clone)]
pub struct AppState {
    pub calculator: CalculatorService,
}

impl AppState {
    pub fn new(store: Arc<dyn RequestStore>) -> Self {
        Self {
            calculator: CalculatorService::new(store),
        }
    }
}

pub async fn hello() -> &'static str {
    "Hello World!"
}

/// 求和，响应中不包含记录 ID
pub async fn sum(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<Json<AnswerResponse>, CoreError> {
    let operands = validate_operands(body.as_ref())?;
    let record = state.calculator.sum(operands).await?;
    Ok(Json(AnswerResponse::answer(record.result)))
}

pub async fn sum_with_id(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<Json<AnswerResponse>, CoreError> {
    let operands = validate_operands(body.as_ref())?;
    let record = state.calculator.sum(operands).await?;
    Ok(Json(AnswerResponse::with_id(record.result, record.id)))
}

pub async fn multiply(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<Json<AnswerResponse>, CoreError> {
    let operands = validate_operands(body.as_ref())?;
    let record = state.calculator.multiply(operands).await?;
    Ok(Json(AnswerResponse::with_id(record.result, record.id)))
}

// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, CoreError> {
    let backend = state.calculator.health().await?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected",
        "backend": backend,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
