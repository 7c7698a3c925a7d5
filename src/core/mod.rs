//! # Core Module
//!
//! 모든 계층이 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **FieldErrors**: 필드별 검증 에러 맵 (422 응답 본문)
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ### [`representation`] - 응답 표현 협상
//! - **Representation**: `Accept` 헤더 기반 JSON / XML 선택
//! - **render**: 선택된 표현으로 본문 직렬화 및 `Content-Type` 설정

pub mod errors;
pub mod representation;

pub use errors::*;
pub use representation::*;
