//! # JSON Patch 요청
//!
//! `PATCH /api/users/{id}` 본문의 연산 목록을 `UserUpdateDto`에 적용합니다.
//!
//! 연산은 DTO의 JSON 표현 위에서 순서대로 실행됩니다. 경로는 필드 하나를 가리키는
//! 단일 세그먼트 JSON 포인터(`/login`, `/firstName`, `/lastName`)이며 대소문자를 구분하지 않습니다.
//!
//! | op | 동작 |
//! |----|------|
//! | `add`, `replace` | `value`로 필드 설정 |
//! | `remove` | 필드를 `null`로 초기화 |
//! | `move` | `from` 필드 값을 옮기고 원래 필드는 `null` |
//! | `copy` | `from` 필드 값을 복사 |
//! | `test` | 현재 값이 `value`와 다르면 실패 |
//!
//! 실패한 연산은 건너뛰고 에러를 누적합니다. 에러 키는 대상 필드 이름(`Login` 등)이며,
//! 경로를 해석할 수 없으면 `Patch`를 사용합니다.
//!
//! ```json
//! [
//!   { "op": "replace", "path": "/login", "value": "johnny" },
//!   { "op": "remove", "path": "/lastName" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::errors::FieldErrors;
use crate::domain::dto::users::request::UserUpdateDto;

const PATCH_ERROR_KEY: &str = "Patch";

/// (JSON 필드 이름, 에러 키)
const PATCHABLE_FIELDS: [(&str, &str); 3] = [
    ("login", "Login"),
    ("firstName", "FirstName"),
    ("lastName", "LastName"),
];

/// 단일 JSON Patch 연산
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl PatchOp {
    fn parse(op: &str) -> Option<Self> {
        match op.to_lowercase().as_str() {
            "add" => Some(PatchOp::Add),
            "remove" => Some(PatchOp::Remove),
            "replace" => Some(PatchOp::Replace),
            "move" => Some(PatchOp::Move),
            "copy" => Some(PatchOp::Copy),
            "test" => Some(PatchOp::Test),
            _ => None,
        }
    }
}

/// 패치 대상 필드
#[derive(Debug, Clone, Copy)]
struct Target {
    json_name: &'static str,
    error_key: &'static str,
}

#[cfg(test)]
impl PatchOperation {
    pub fn new(op: &str, path: &str, value: Option<Value>) -> Self {
        Self {
            op: op.to_string(),
            path: path.to_string(),
            from: None,
            value,
        }
    }

    pub fn with_from(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }
}

/// 연산 목록을 DTO에 적용합니다.
///
/// 하나라도 실패하면 누적된 필드 에러를 반환하며, 성공한 연산의 결과도 버려집니다.
pub fn apply_patch(
    dto: &UserUpdateDto,
    operations: &[PatchOperation],
) -> Result<UserUpdateDto, FieldErrors> {
    let mut document = match serde_json::to_value(dto) {
        Ok(Value::Object(map)) => map,
        _ => return Err(FieldErrors::single(PATCH_ERROR_KEY, "The target document could not be read.")),
    };
    let mut errors = FieldErrors::new();

    for operation in operations {
        if let Err((key, message)) = apply_operation(&mut document, operation) {
            log::debug!("패치 연산 실패 ({} {}): {}", operation.op, operation.path, message);
            errors.add(key, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value(Value::Object(document))
        .map_err(|e| FieldErrors::single(PATCH_ERROR_KEY, format!("The patched document is invalid: {}", e)))
}

type OperationError = (&'static str, String);

fn apply_operation(
    document: &mut Map<String, Value>,
    operation: &PatchOperation,
) -> Result<(), OperationError> {
    let op = PatchOp::parse(&operation.op).ok_or_else(|| {
        (
            PATCH_ERROR_KEY,
            format!("Invalid JsonPatch operation '{}'.", operation.op),
        )
    })?;
    let target = resolve_path(&operation.path)?;

    match op {
        PatchOp::Add | PatchOp::Replace => {
            let value = required_value(operation, target)?;
            set_field(document, target, value.clone())
        }
        PatchOp::Remove => {
            document.insert(target.json_name.to_string(), Value::Null);
            Ok(())
        }
        PatchOp::Move | PatchOp::Copy => {
            let source = resolve_from(operation)?;
            let value = document.get(source.json_name).cloned().unwrap_or(Value::Null);
            if op == PatchOp::Move {
                document.insert(source.json_name.to_string(), Value::Null);
            }
            set_field(document, target, value)
        }
        PatchOp::Test => {
            let expected = required_value(operation, target)?;
            let current = document.get(target.json_name).unwrap_or(&Value::Null);
            if current == expected {
                Ok(())
            } else {
                Err((
                    target.error_key,
                    format!(
                        "The current value '{}' at path '{}' is not equal to the test value '{}'.",
                        current, operation.path, expected
                    ),
                ))
            }
        }
    }
}

fn resolve_path(path: &str) -> Result<Target, OperationError> {
    let segment = path.strip_prefix('/').unwrap_or(path);

    if segment.is_empty() || segment.contains('/') {
        return Err((
            PATCH_ERROR_KEY,
            format!("The path '{}' does not name a single field.", path),
        ));
    }

    let segment = segment.replace("~1", "/").replace("~0", "~");

    PATCHABLE_FIELDS
        .iter()
        .find(|(json_name, _)| json_name.eq_ignore_ascii_case(&segment))
        .map(|&(json_name, error_key)| Target {
            json_name,
            error_key,
        })
        .ok_or_else(|| {
            (
                PATCH_ERROR_KEY,
                format!("The target location specified by path segment '{}' was not found.", segment),
            )
        })
}

fn resolve_from(operation: &PatchOperation) -> Result<Target, OperationError> {
    match operation.from.as_deref() {
        Some(from) => resolve_path(from),
        None => Err((
            PATCH_ERROR_KEY,
            format!("The '{}' operation requires a 'from' path.", operation.op),
        )),
    }
}

fn required_value<'a>(
    operation: &'a PatchOperation,
    target: Target,
) -> Result<&'a Value, OperationError> {
    operation.value.as_ref().ok_or_else(|| {
        (
            target.error_key,
            format!("The '{}' operation requires a value.", operation.op),
        )
    })
}

/// 모든 패치 가능 필드는 문자열 또는 `null`입니다.
fn set_field(
    document: &mut Map<String, Value>,
    target: Target,
    value: Value,
) -> Result<(), OperationError> {
    match value {
        Value::String(_) | Value::Null => {
            document.insert(target.json_name.to_string(), value);
            Ok(())
        }
        other => Err((
            target.error_key,
            format!("The value '{}' is invalid for target location.", other),
        )),
    }
}
