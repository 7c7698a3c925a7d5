//! 사용자 요청 DTO
//!
//! - [`create_user`] - `POST` 본문 (`UserCreateDto`)
//! - [`update_user`] - `PUT` 본문 및 `PATCH` 기준 형태 (`UserUpdateDto`)
//! - [`patch`] - JSON Patch 연산 목록과 적용 로직
//! - [`validation`] - 로그인 규칙과 422 변환

pub mod create_user;
pub mod patch;
pub mod update_user;
pub mod validation;

pub use create_user::UserCreateDto;
pub use patch::{apply_patch, PatchOperation};
pub use update_user::UserUpdateDto;
