//! 请求体校验
//!
//! 校验 `{a: number, b: number}` 结构。校验失败是正常结果，通过
//! `Result` 返回而不是 panic。多余字段会被忽略。

use serde::Serialize;
use serde_json::{Map, Value};

use super::model::Operands;

/// 必填的数值字段，按报告顺序排列
const OPERAND_FIELDS: [&str; 2] = ["a", "b"];

/// 单条校验问题
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<&'static str>,
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    fn invalid_type(path: Vec<String>, expected: &'static str, received: &'static str) -> Self {
        let message = if received == "undefined" {
            "Required".to_string()
        } else {
            format!("Expected {}, received {}", expected, received)
        };
        Self {
            code: "invalid_type",
            expected: Some(expected),
            received: Some(received),
            path,
            message,
        }
    }

    fn invalid_json(message: String) -> Self {
        Self {
            code: "invalid_json",
            expected: None,
            received: None,
            path: Vec::new(),
            message,
        }
    }
}

/// 校验错误，`Display` 输出为缩进两格的问题列表 JSON
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", render_issues(.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    /// 请求体不是合法 JSON
    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::invalid_json(reason.into())],
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

fn render_issues(issues: &[Issue]) -> String {
    serde_json::to_string_pretty(issues).unwrap_or_else(|_| {
        issues
            .iter()
            .map(|issue| issue.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}

/// 返回值的类型名，用于错误信息中的 `received`
fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// 校验输入并提取两个操作数
pub fn validate_operands(input: Option<&Value>) -> Result<Operands, ValidationError> {
    let object = match input {
        Some(Value::Object(object)) => object,
        other => {
            return Err(ValidationError {
                issues: vec![Issue::invalid_type(Vec::new(), "object", type_name(other))],
            })
        }
    };

    let mut issues = Vec::new();
    let mut values = [0.0_f64; OPERAND_FIELDS.len()];
    for (slot, field) in values.iter_mut().zip(OPERAND_FIELDS) {
        match number_field(object, field) {
            Ok(number) => *slot = number,
            Err(issue) => issues.push(issue),
        }
    }

    if !issues.is_empty() {
        return Err(ValidationError { issues });
    }

    let [a, b] = values;
    Ok(Operands { a, b })
}

fn number_field(object: &Map<String, Value>, field: &str) -> Result<f64, Issue> {
    let value = object.get(field);
    value
        .and_then(Value::as_f64)
        .filter(|number| number.is_finite())
        .ok_or_else(|| Issue::invalid_type(vec![field.to_string()], "number", type_name(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_operands() {
        let input = json!({"a": 1, "b": 2.5});
        let operands = validate_operands(Some(&input)).unwrap();
        assert_eq!(operands, Operands { a: 1.0, b: 2.5 });
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let input = json!({"a": -4, "b": 2, "c": "ignored", "nested": {"x": 1}});
        let operands = validate_operands(Some(&input)).unwrap();
        assert_eq!(operands, Operands { a: -4.0, b: 2.0 });
    }

    #[test]
    fn test_absent_body() {
        let err = validate_operands(None).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].expected, Some("object"));
        assert_eq!(err.issues()[0].message, "Required");
        assert!(err.issues()[0].path.is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let err = validate_operands(Some(&json!({}))).unwrap_err();
        let paths: Vec<_> = err.issues().iter().map(|i| i.path.clone()).collect();
        assert_eq!(paths, vec![vec!["a".to_string()], vec!["b".to_string()]]);
        assert!(err.issues().iter().all(|i| i.message == "Required"));
    }

    #[test]
    fn test_wrong_type() {
        let err = validate_operands(Some(&json!({"a": "1", "b": 2}))).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].received, Some("string"));
        assert_eq!(err.issues()[0].message, "Expected number, received string");
    }

    #[test]
    fn test_non_object_body() {
        let err = validate_operands(Some(&json!([1, 2]))).unwrap_err();
        assert_eq!(err.issues()[0].message, "Expected object, received array");

        let err = validate_operands(Some(&Value::Null)).unwrap_err();
        assert_eq!(err.issues()[0].received, Some("null"));
    }

    #[test]
    fn test_message_is_pretty_printed_issue_list() {
        let err = validate_operands(Some(&json!({"b": 2}))).unwrap_err();
        let expected = r#"[
  {
    "code": "invalid_type",
    "expected": "number",
    "received": "undefined",
    "path": [
      "a"
    ],
    "message": "Required"
  }
]"#;
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_malformed_body_message() {
        let err = ValidationError::malformed_body("expected value at line 1 column 1");
        let rendered: Value = serde_json::from_str(&err.to_string()).unwrap();
        assert_eq!(rendered[0]["code"], "invalid_json");
        assert_eq!(rendered[0]["message"], "expected value at line 1 column 1");
    }
}
