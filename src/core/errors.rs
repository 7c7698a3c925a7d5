//! # Application Error Handling System
//!
//! 사용자 리소스 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 정의한 `AppError`가 `actix_web::ResponseError`를 구현하여,
//! 핸들러와 서비스는 `?` 연산자만으로 올바른 HTTP 응답을 만들어냅니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | `BadRequest` | 400 Bad Request | 없음 |
//! | `NotFound` | 404 Not Found | 없음 |
//! | `Unprocessable` | 422 Unprocessable Entity | 필드별 에러 맵 |
//! | `InternalError` | 500 Internal Server Error | `{"error": ...}` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult, FieldErrors};
//!
//! async fn find(repo: &dyn UserRepository, id: Uuid) -> AppResult<UserEntity> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
//! }
//! ```
//!
//! ## 422 응답 형식
//!
//! ```json
//! {
//!   "Login": ["Login should contain only letters or digits"]
//! }
//! ```

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::string_utils::to_pascal_case;

/// 필드 이름 → 사람이 읽을 수 있는 메시지 목록
///
/// 필드 이름은 클라이언트에 노출되는 PascalCase(`Login`, `FirstName`)로 저장됩니다.
/// `BTreeMap`을 사용하므로 직렬화 순서가 항상 일정합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단일 필드 에러로 구성된 맵을 생성합니다.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// 필드에 메시지를 추가합니다. 같은 필드의 기존 메시지는 유지됩니다.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// 비어 있으면 `Ok(())`, 아니면 422 에러로 변환합니다.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Unprocessable(self))
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    /// `validator` 크레이트의 에러를 필드 에러 맵으로 변환합니다.
    ///
    /// 필드 이름은 snake_case → PascalCase로 바뀌며,
    /// 메시지가 지정되지 않은 규칙은 규칙 코드로 기본 메시지를 만듭니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = FieldErrors::new();

        for (field, errors) in errors.field_errors() {
            let key = to_pascal_case(&field.to_string());
            for error in errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid ({}).", key, error.code),
                };
                field_errors.add(key.clone(), message);
            }
        }

        field_errors
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 실패를 포괄하며,
/// `ResponseError` 구현을 통해 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 형식 오류 (400 Bad Request)
    ///
    /// 본문이 `null`이거나 비어 있는 경우, JSON 파싱 실패, nil UUID 등.
    /// 메시지는 로그에만 남고 응답 본문은 비어 있습니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 없음 (404 Not Found, 빈 본문)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 필드 검증 실패 (422 Unprocessable Entity)
    ///
    /// 필수 필드 누락, 로그인 문자 규칙 위반, 패치 적용 실패가 모두 여기로 모입니다.
    #[error("Validation failed: {0:?}")]
    Unprocessable(FieldErrors),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 저장소 장애, 직렬화 실패 등 호출자가 해결할 수 없는 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 400/404는 본문 없이, 422는 필드 에러 맵을, 500은 `{"error": ...}`를 반환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::BadRequest(reason) | AppError::NotFound(reason) => {
                log::debug!("{} 응답: {}", status, reason);
                HttpResponse::build(status).finish()
            }
            AppError::Unprocessable(errors) => HttpResponse::build(status).json(errors),
            _ => {
                log::error!("요청 처리 실패: {}", self);
                HttpResponse::build(status).json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
