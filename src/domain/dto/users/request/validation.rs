//! 사용자 요청 DTO 공통 검증 규칙
//!
//! 로그인 필드 규칙과 `validator` 결과를 422 에러로 변환하는 헬퍼를 제공합니다.

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::core::errors::{AppResult, FieldErrors};
use crate::utils::string_utils::is_letters_or_digits;

pub const LOGIN_REQUIRED_MESSAGE: &str = "The Login field is required.";
pub const LOGIN_CHARACTERS_MESSAGE: &str = "Login should contain only letters or digits";

/// 로그인 값 검증 (`validator` custom 함수)
///
/// 공백뿐인 값은 누락으로, 문자/숫자 이외의 문자가 포함된 값은 규칙 위반으로 처리합니다.
pub fn validate_login(login: &str) -> Result<(), ValidationError> {
    if login.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(LOGIN_REQUIRED_MESSAGE)));
    }

    if !is_letters_or_digits(login) {
        return Err(ValidationError::new("letters_or_digits")
            .with_message(Cow::Borrowed(LOGIN_CHARACTERS_MESSAGE)));
    }

    Ok(())
}

/// DTO를 검증하고 실패 시 필드 에러 맵을 담은 422 에러를 반환합니다.
pub fn validate_request<T: Validate>(dto: &T) -> AppResult<()> {
    match dto.validate() {
        Ok(()) => Ok(()),
        Err(errors) => FieldErrors::from(errors).into_result(),
    }
}
