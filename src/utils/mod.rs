//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 로그인 문자 규칙, 필드 이름 변환, 관대한 쿼리 파싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{is_letters_or_digits, to_pascal_case};
//!
//! assert!(is_letters_or_digits("john42"));
//! assert_eq!(to_pascal_case("first_name"), "FirstName");
//! ```

pub mod string_utils;
