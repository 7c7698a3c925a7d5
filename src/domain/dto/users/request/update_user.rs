//! # 사용자 갱신 요청 DTO
//!
//! `PUT /api/users/{id}` 요청 본문이며, `PATCH` 적용 시 기준이 되는 형태입니다.
//! 로그인 규칙은 생성 요청과 동일합니다. 이름 필드에는 기본값이 없습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::validation::{validate_login, validate_request};
use crate::domain::entities::users::UserEntity;

/// 사용자 갱신 요청 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    #[serde(default)]
    #[validate(
        required(message = "The Login field is required."),
        custom(function = "validate_login")
    )]
    pub login: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserUpdateDto {
    pub fn validate_dto(&self) -> AppResult<()> {
        validate_request(self)
    }

    /// DTO 값을 엔티티에 덮어씁니다. 엔티티의 ID는 유지됩니다.
    pub fn apply_to(self, entity: &mut UserEntity) {
        entity.login = self.login.unwrap_or_default();
        entity.first_name = self.first_name;
        entity.last_name = self.last_name;
    }
}

impl From<&UserEntity> for UserUpdateDto {
    fn from(entity: &UserEntity) -> Self {
        Self {
            login: Some(entity.login.clone()),
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
        }
    }
}
