//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//!
//! ## 특징
//!
//! - **추상화된 저장소**: 서비스는 `UserRepository` trait에만 의존
//! - **인메모리 구현**: `tokio::sync::RwLock<HashMap>` 기반 `InMemoryUserRepository`
//! - **안정적인 페이지 순서**: 로그인 → ID 순으로 정렬 후 페이지 분할

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::dto::common::{Page, PageRequest};
use crate::domain::entities::users::UserEntity;

/// 사용자 데이터 액세스 계약
///
/// 모든 메서드는 엔티티의 복사본을 주고받으며, 저장소가 원본을 소유합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자를 조회합니다. 없으면 `None`.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserEntity>>;

    /// 요청한 페이지의 사용자 목록과 전체 개수를 반환합니다.
    async fn get_page(&self, request: PageRequest) -> AppResult<Page<UserEntity>>;

    /// 새 사용자를 저장합니다. 저장소가 새 v4 UUID를 할당하며, 저장된 엔티티를 반환합니다.
    async fn insert(&self, user: UserEntity) -> AppResult<UserEntity>;

    /// ID 기준으로 갱신하거나, 없으면 삽입합니다.
    ///
    /// 삽입이 일어난 경우 `true`를 반환합니다.
    async fn update_or_insert(&self, user: UserEntity) -> AppResult<bool>;

    /// ID로 사용자를 삭제합니다. 없는 ID는 무시됩니다.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// 저장된 사용자 수
    async fn count(&self) -> AppResult<u64>;
}

/// 인메모리 사용자 저장소
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, UserEntity>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 데이터로 저장소를 생성합니다.
    pub fn with_users(users: Vec<UserEntity>) -> Self {
        let users_map = users.into_iter().map(|user| (user.id, user)).collect();

        Self {
            users: Arc::new(RwLock::new(users_map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserEntity>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_page(&self, request: PageRequest) -> AppResult<Page<UserEntity>> {
        let users = self.users.read().await;

        let mut sorted: Vec<&UserEntity> = users.values().collect();
        sorted.sort_by(|a, b| a.login.cmp(&b.login).then_with(|| a.id.cmp(&b.id)));

        let items = sorted
            .into_iter()
            .skip(request.offset())
            .take(request.page_size as usize)
            .cloned()
            .collect();

        Ok(Page::new(
            items,
            users.len() as u64,
            request.page_number,
            request.page_size,
        ))
    }

    async fn insert(&self, mut user: UserEntity) -> AppResult<UserEntity> {
        let mut users = self.users.write().await;

        user.id = loop {
            let candidate = Uuid::new_v4();
            if !users.contains_key(&candidate) {
                break candidate;
            }
        };
        users.insert(user.id, user.clone());

        log::debug!("사용자 저장: {}", user.id);
        Ok(user)
    }

    async fn update_or_insert(&self, user: UserEntity) -> AppResult<bool> {
        let mut users = self.users.write().await;
        let inserted = users.insert(user.id, user).is_none();
        Ok(inserted)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut users = self.users.write().await;
        users.remove(&id);
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }
}
