//! # 사용자 생성 요청 DTO
//!
//! `POST /api/users` 요청 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! ### 로그인 (`login`)
//! - 필수 (누락 또는 공백뿐인 값 → `"The Login field is required."`)
//! - 허용 문자: 유니코드 문자와 숫자만 (→ `"Login should contain only letters or digits"`)
//!
//! ### 이름 (`firstName`, `lastName`)
//! - 선택 사항. 필드가 생략되면 각각 `"John"`, `"Doe"`가 기본값으로 사용됩니다.
//! - 명시적으로 `null`을 보내면 값 없이 저장됩니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "login": "johndoe",
//!   "firstName": "John",
//!   "lastName": "Doe"
//! }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::validation::{validate_login, validate_request};
use crate::domain::entities::users::UserEntity;

/// 사용자 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateDto {
    #[serde(default = "default_first_name")]
    pub first_name: Option<String>,

    #[serde(default = "default_last_name")]
    pub last_name: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "The Login field is required."),
        custom(function = "validate_login")
    )]
    pub login: Option<String>,
}

fn default_first_name() -> Option<String> {
    Some("John".to_string())
}

fn default_last_name() -> Option<String> {
    Some("Doe".to_string())
}

impl UserCreateDto {
    /// 필수 필드와 로그인 문자 규칙을 검증합니다. 실패 시 422.
    pub fn validate_dto(&self) -> AppResult<()> {
        validate_request(self)
    }

    /// 새 엔티티로 변환합니다. ID는 저장소가 삽입 시 할당합니다.
    pub fn into_entity(self) -> UserEntity {
        UserEntity {
            id: Uuid::nil(),
            login: self.login.unwrap_or_default(),
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}
