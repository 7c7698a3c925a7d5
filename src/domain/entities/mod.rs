//! # Domain Entities
//!
//! 저장소가 소유하는 핵심 도메인 엔티티입니다.
//!
//! - [`users`] - `UserEntity`

pub mod users;

pub use users::*;
