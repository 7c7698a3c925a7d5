//! # 사용자 관리 서비스 구현
//!
//! 사용자 리소스의 생성, 조회, 갱신(전체/부분), 삭제 규칙을 구현합니다.
//! HTTP 세부 사항(상태 코드, 헤더, 표현)은 핸들러가 담당하고,
//! 이 서비스는 검증, 조회, 매핑, 저장소 변경만 수행합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        UserService                        │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────────┐  │
//! │  │   Query      │  │   Mutation   │  │   Patch         │  │
//! │  │ • By ID      │  │ • Create     │  │ • Project DTO   │  │
//! │  │ • Paged list │  │ • Upsert     │  │ • Apply ops     │  │
//! │  │ • Entity→DTO │  │ • Delete     │  │ • Re-validate   │  │
//! │  └──────────────┘  └──────────────┘  └─────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │               Arc<dyn UserRepository>                     │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 규칙
//!
//! | 상황 | 에러 |
//! |------|------|
//! | PUT 대상 ID가 nil UUID | `BadRequest` |
//! | DELETE 대상 ID가 nil UUID 또는 없음 | `NotFound` |
//! | GET / PATCH 대상 없음 | `NotFound` |
//! | 검증 실패, 패치 실패 | `Unprocessable` |

use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::common::{Page, PageRequest};
use crate::domain::dto::users::request::{
    apply_patch, PatchOperation, UserCreateDto, UserUpdateDto,
};
use crate::domain::dto::users::response::UserDto;
use crate::domain::entities::users::UserEntity;
use crate::repositories::users::UserRepository;

/// PUT 요청 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// 존재하지 않던 사용자를 요청 ID로 생성함 (201)
    Created,
    /// 기존 사용자를 갱신함 (204)
    Updated,
}

/// 사용자 리소스 비즈니스 로직 서비스
///
/// 공유 상태는 저장소뿐이며, `web::Data<UserService>`로 모든 워커에 공유됩니다.
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// ID로 사용자를 조회합니다.
    pub async fn find_user(&self, id: Uuid) -> AppResult<UserDto> {
        let user = self.load_user(id).await?;
        Ok(UserDto::from(&user))
    }

    /// 정규화된 페이지 요청으로 사용자 목록을 조회합니다.
    pub async fn list_users(&self, request: PageRequest) -> AppResult<Page<UserDto>> {
        let page = self.user_repo.get_page(request).await?;

        log::debug!(
            "사용자 목록 조회: page={} size={} total={}",
            page.current_page,
            page.page_size,
            page.total_count
        );

        Ok(page.map(|user| UserDto::from(&user)))
    }

    /// 새 사용자를 생성하고 할당된 ID를 반환합니다.
    ///
    /// 필수 필드 검증 후 로그인 문자 규칙을 확인하며, 실패 시 422입니다.
    pub async fn create_user(&self, request: UserCreateDto) -> AppResult<Uuid> {
        request.validate_dto()?;

        let created = self.user_repo.insert(request.into_entity()).await?;

        log::info!("사용자 생성 완료: {} ({})", created.id, created.login);
        Ok(created.id)
    }

    /// 사용자를 전체 갱신하거나, 없으면 요청 ID로 생성합니다.
    pub async fn upsert_user(&self, id: Uuid, request: UserUpdateDto) -> AppResult<UpsertOutcome> {
        if id.is_nil() {
            return Err(AppError::BadRequest("nil UUID는 사용자 ID로 사용할 수 없습니다".to_string()));
        }

        request.validate_dto()?;

        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .unwrap_or_else(|| UserEntity::new(id));
        request.apply_to(&mut user);

        let inserted = self.user_repo.update_or_insert(user).await?;

        if inserted {
            log::info!("사용자 생성 완료 (PUT): {}", id);
            Ok(UpsertOutcome::Created)
        } else {
            log::info!("사용자 갱신 완료: {}", id);
            Ok(UpsertOutcome::Updated)
        }
    }

    /// 사용자를 삭제합니다. nil UUID나 없는 사용자는 404입니다.
    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        if id.is_nil() {
            return Err(AppError::NotFound(format!("user {}", id)));
        }

        let user = self.load_user(id).await?;
        self.user_repo.delete(user.id).await?;

        log::info!("사용자 삭제 완료: {}", id);
        Ok(())
    }

    /// JSON Patch 연산을 적용합니다.
    ///
    /// 엔티티를 `UserUpdateDto`로 투영해 연산을 순서대로 적용한 뒤 다시 검증합니다.
    /// 패치 실패나 검증 실패는 422로 반환되며, 이 경우 엔티티는 변경되지 않습니다.
    pub async fn patch_user(&self, id: Uuid, operations: &[PatchOperation]) -> AppResult<()> {
        let mut user = self.load_user(id).await?;

        let patched = apply_patch(&UserUpdateDto::from(&user), operations)
            .map_err(AppError::Unprocessable)?;

        patched.validate_dto()?;

        patched.apply_to(&mut user);
        let inserted = self.user_repo.update_or_insert(user).await?;

        if inserted {
            log::warn!("패치 대상 사용자가 갱신 중 삭제되어 다시 생성됨: {}", id);
        } else {
            log::info!("사용자 패치 완료: {} ({}개 연산)", id, operations.len());
        }
        Ok(())
    }

    /// 저장된 사용자 수 (헬스 체크용)
    pub async fn count_users(&self) -> AppResult<u64> {
        self.user_repo.count().await
    }

    async fn load_user(&self, id: Uuid) -> AppResult<UserEntity> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }
}
