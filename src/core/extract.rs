//! 请求体提取
//!
//! 读取原始请求体并转换为 `serde_json::Value`，交给校验器处理。
//! 空请求体视为缺失；表单请求体的值全部是字符串；JSON 请求体按 JSON 解析；
//! 其他内容类型（包括没有 `Content-Type`）不解析，视为缺失。

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::{Map, Value};

use super::error::CoreError;
use crate::app::calculator::validator::ValidationError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// 请求体的解析方式，由 `Content-Type` 决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    Unsupported,
}

impl BodyKind {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return BodyKind::Unsupported;
        };

        // 忽略 `; charset=...` 等参数
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == JSON_CONTENT_TYPE
            || (essence.starts_with("application/") && essence.ends_with("+json"))
        {
            BodyKind::Json
        } else if essence == FORM_CONTENT_TYPE {
            BodyKind::Form
        } else {
            BodyKind::Unsupported
        }
    }
}

/// 解码后的请求体，`None` 表示请求没有携带内容
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Option<Value>);

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = BodyKind::from_content_type(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let bytes = Bytes::from_request(req, state).await?;
        Ok(Payload(decode_body(&bytes, kind)?))
    }
}

/// 按内容类型解码请求体
pub fn decode_body(bytes: &[u8], kind: BodyKind) -> Result<Option<Value>, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match kind {
        BodyKind::Json => serde_json::from_slice(bytes)
            .map(Some)
            .map_err(|err| ValidationError::malformed_body(err.to_string())),
        BodyKind::Form => {
            let fields: Map<String, Value> = url::form_urlencoded::parse(bytes)
                .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
                .collect();
            Ok(Some(Value::Object(fields)))
        }
        BodyKind::Unsupported => Ok(None),
    }
}
