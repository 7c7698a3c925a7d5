//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 주입받아 생성되며, `web::Data`로 핸들러에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let user = user_service.find_user(user_id).await?;
//! ```

pub mod users;
