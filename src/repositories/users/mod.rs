//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) trait과
//! 인메모리 구현 [`InMemoryUserRepository`](user_repo::InMemoryUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = repo.find_by_id(user_id).await?;
//! ```

pub mod user_repo;

pub use user_repo::{InMemoryUserRepository, UserRepository};
