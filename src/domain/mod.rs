//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 엔티티와 데이터 전송 객체, 검증 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities     - 저장소가 소유하는 사용자 레코드
//! └── DTOs         - 요청/응답 표현, 패치 연산, 페이지네이션
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```
//!
//! ## 매핑 규칙
//!
//! | 방향 | 구현 |
//! |------|------|
//! | `UserCreateDto` → `UserEntity` | `UserCreateDto::into_entity` |
//! | `UserUpdateDto` → `UserEntity` | `UserUpdateDto::apply_to` |
//! | `UserEntity` → `UserUpdateDto` | `From<&UserEntity>` |
//! | `UserEntity` → `UserDto` | `From<&UserEntity>` |

pub mod dto;
pub mod entities;
