//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 노출되는 형태로 투영한 응답 객체들입니다.
//!
//! - `UserDto` - 단일 사용자 표현 (`id`, `login`, `firstName`, `lastName`, `fullName`)
//! - `UserXml` - 단일 사용자의 XML 표현 (없는 이름 요소는 생략)
//! - `UserDtoArray` - 목록의 XML 표현 (`ArrayOfUserDto`)
//! - `UpsertedUserDto` - PUT 생성 응답 본문 (`guid`)
//!
//! ```rust,ignore
//! use crate::domain::dto::users::response::UserDto;
//!
//! let dto = UserDto::from(&entity);
//! representation.render(HttpResponse::Ok(), "UserDto", &dto)?;
//! ```

pub mod user_response;

pub use user_response::{UpsertedUserDto, UserDto, UserDtoArray, UserXml};
