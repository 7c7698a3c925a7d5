use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::UserEntity;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    /// `"{lastName} {firstName}"` (편의 필드)
    pub full_name: String,
}

impl From<&UserEntity> for UserDto {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
        }
    }
}

/// 사용자의 XML 표현
///
/// 값이 없는 이름은 요소를 생략합니다. `<firstName/>`은 빈 문자열만 뜻합니다.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserXml<'a> {
    pub id: Uuid,
    pub login: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<&'a str>,
    pub full_name: &'a str,
}

impl<'a> From<&'a UserDto> for UserXml<'a> {
    fn from(user: &'a UserDto) -> Self {
        Self {
            id: user.id,
            login: &user.login,
            first_name: user.first_name.as_deref(),
            last_name: user.last_name.as_deref(),
            full_name: &user.full_name,
        }
    }
}

/// 사용자 목록의 XML 표현
///
/// `<ArrayOfUserDto><UserDto>..</UserDto></ArrayOfUserDto>` 형태로 직렬화됩니다.
/// JSON 표현은 `UserDto` 배열을 그대로 사용합니다.
#[derive(Debug, Serialize)]
pub struct UserDtoArray<'a> {
    #[serde(rename = "UserDto")]
    pub items: Vec<UserXml<'a>>,
}

impl<'a> UserDtoArray<'a> {
    pub fn new(users: &'a [UserDto]) -> Self {
        Self {
            items: users.iter().map(UserXml::from).collect(),
        }
    }
}

/// PUT으로 생성된 사용자의 ID 본문
///
/// JSON은 `{"guid": "..."}`, XML은 `<UpsertedUserDto><guid>..</guid></UpsertedUserDto>`입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertedUserDto {
    pub guid: Uuid,
}
