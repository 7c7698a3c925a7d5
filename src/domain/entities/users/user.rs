//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 저장소가 소유하는 사용자 레코드입니다. 핸들러와 서비스는 복사본만 다룹니다.
/// `id`는 한 번 할당되면 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: Uuid,
    /// 로그인 이름 (문자와 숫자만 허용)
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserEntity {
    /// 지정한 ID로 빈 엔티티를 생성합니다.
    ///
    /// PUT 요청으로 존재하지 않는 사용자를 생성할 때 클라이언트가 제공한 ID를 그대로 사용합니다.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            login: String::new(),
            first_name: None,
            last_name: None,
        }
    }

    /// `"{last_name} {first_name}"` 형태의 전체 이름. 양쪽 공백은 제거됩니다.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.last_name.as_deref().unwrap_or_default(),
            self.first_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}
