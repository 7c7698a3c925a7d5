//! 사용자 관리 서비스 모듈
//!
//! 사용자 리소스의 생명주기(생성, 조회, 전체/부분 갱신, 삭제) 규칙을 구현합니다.
//!
//! # Features
//!
//! - 로그인 필수 및 문자/숫자 규칙 검증
//! - PUT 업서트 (없는 ID는 생성)
//! - JSON Patch 적용 후 재검증

pub mod user_service;

pub use user_service::{UpsertOutcome, UserService};
