//! 核心响应处理模块

use serde::{Deserialize, Serialize, Serializer};

/// 可以被 IEEE 754 双精度精确表示的最大整数
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// 计算结果响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(serialize_with = "serialize_number")]
    pub answer: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl AnswerResponse {
    pub fn answer(answer: f64) -> Self {
        Self { answer, id: None }
    }

    pub fn with_id(answer: f64, id: i64) -> Self {
        Self {
            answer,
            id: Some(id),
        }
    }
}

/// 整数值输出为 JSON 整数（`3` 而不是 `3.0`），非有限值输出为 `null`
pub fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_answer_serializes_as_integer() {
        let body = serde_json::to_string(&AnswerResponse::answer(3.0)).unwrap();
        assert_eq!(body, r#"{"answer":3}"#);
    }

    #[test]
    fn test_fractional_answer_and_id() {
        let body = serde_json::to_string(&AnswerResponse::with_id(0.5, 7)).unwrap();
        assert_eq!(body, r#"{"answer":0.5,"id":7}"#);
    }

    #[test]
    fn test_large_and_non_finite_answers() {
        let body = serde_json::to_string(&AnswerResponse::answer(1e300)).unwrap();
        assert_eq!(body, r#"{"answer":1e300}"#);

        let body = serde_json::to_string(&AnswerResponse::answer(f64::INFINITY)).unwrap();
        assert_eq!(body, r#"{"answer":null}"#);
    }
}
