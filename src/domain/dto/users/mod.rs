//! 사용자 DTO
//!
//! - [`request`] - 생성/갱신/패치 요청 본문
//! - [`response`] - 사용자 응답 표현

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
