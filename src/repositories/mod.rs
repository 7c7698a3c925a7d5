//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 trait 객체(`Arc<dyn UserRepository>`)를 통해 저장소에 접근하므로,
//! 구현체를 교체해도 상위 계층은 변경되지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::InMemoryUserRepository;
//!
//! let repo = InMemoryUserRepository::new();
//! let saved = repo.insert(entity).await?;
//! ```

pub mod users;
