//! 计算器数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 运算类型，持久化为 `SUM` / `MULTIPLY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Sum,
    Multiply,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sum => "SUM",
            Operation::Multiply => "MULTIPLY",
        }
    }

    /// 对两个操作数执行运算
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Sum => a + b,
            Operation::Multiply => a * b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUM" => Ok(Operation::Sum),
            "MULTIPLY" => Ok(Operation::Multiply),
            other => Err(format!("unknown operation type: {}", other)),
        }
    }
}

/// 通过校验的操作数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

/// 待写入的计算请求
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewArithmeticRequest {
    pub a: f64,
    pub b: f64,
    pub result: f64,
    #[serde(rename = "type")]
    pub operation: Operation,
}

impl NewArithmeticRequest {
    pub fn new(operands: Operands, operation: Operation) -> Self {
        Self {
            a: operands.a,
            b: operands.b,
            result: operation.apply(operands.a, operands.b),
            operation,
        }
    }
}

/// 已持久化的计算请求记录，创建后不可修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArithmeticRequest {
    pub id: i64,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    #[serde(rename = "type")]
    pub operation: Operation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArithmeticRequest {
    pub fn from_new(id: i64, request: NewArithmeticRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            a: request.a,
            b: request.b,
            result: request.result,
            operation: request.operation,
            created_at,
            updated_at: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Sum.apply(1.0, 2.0), 3.0);
        assert_eq!(Operation::Multiply.apply(3.0, 2.0), 6.0);
    }

    #[test]
    fn test_operation_tag() {
        assert_eq!(Operation::Multiply.to_string(), "MULTIPLY");
        assert_eq!("SUM".parse::<Operation>(), Ok(Operation::Sum));
        assert!("DIVIDE".parse::<Operation>().is_err());
        assert_eq!(
            serde_json::to_value(Operation::Multiply).unwrap(),
            serde_json::json!("MULTIPLY")
        );
    }

    #[test]
    fn test_new_request_computes_result() {
        let request = NewArithmeticRequest::new(Operands { a: 3.0, b: 2.0 }, Operation::Multiply);
        assert_eq!(request.result, 6.0);
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({"a": 3.0, "b": 2.0, "result": 6.0, "type": "MULTIPLY"})
        );
    }
}
