//! 사용자 리소스 서비스
//!
//! 사용자 엔티티를 위한 REST 리소스 서비스입니다.
//! 단건/페이지 조회, 생성, 업서트, JSON Patch 부분 갱신, 삭제,
//! 그리고 OPTIONS 메서드 조회를 제공합니다.
//!
//! # Features
//!
//! - **페이지 조회**: `X-Pagination` 헤더로 이전/다음 페이지 링크 제공
//! - **업서트**: PUT 요청 시 없는 사용자는 요청 ID로 생성
//! - **JSON Patch**: add/remove/replace/move/copy/test 연산 지원
//! - **표현 협상**: `Accept` 헤더에 따라 JSON 또는 XML 응답
//! - **검증**: 로그인 필수 및 문자/숫자 규칙, 필드별 422 에러 맵
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/users, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 표현 협상
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 매핑, 패치 적용
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    In-Memory    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_resource_service::repositories::users::InMemoryUserRepository;
//! use user_resource_service::routes::configure_all_routes;
//! use user_resource_service::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//! let app = App::new().app_data(service).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
