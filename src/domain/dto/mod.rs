//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 데이터 구조입니다.
//!
//! - [`users`] - 사용자 요청/응답 DTO
//! - [`common`] - 페이지네이션 등 리소스 공통 타입

pub mod common;
pub mod users;
