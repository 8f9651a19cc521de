//! 核心错误处理模块

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::app::calculator::{repository::StoreError, validator::ValidationError};

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            // 所有校验失败统一返回 411，与既有客户端保持兼容
            CoreError::Validation(err) => (
                StatusCode::LENGTH_REQUIRED,
                Json(ErrorResponse::new(err.to_string())),
            )
                .into_response(),
            CoreError::Store(err) => {
                error!("存储写入失败: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal Server Error")),
                )
                    .into_response()
            }
            CoreError::Body(rejection) => rejection.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_411() {
        let err = CoreError::from(ValidationError::malformed_body("eof"));
        assert_eq!(err.into_response().status(), StatusCode::LENGTH_REQUIRED);
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let err = CoreError::from(StoreError::Unavailable("connection refused".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
