//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::{Deserialize, Deserializer};

/// 문자열이 문자(letter)와 숫자(digit)로만 구성되어 있는지 확인합니다.
///
/// 유니코드 문자/숫자를 모두 허용하며(`char::is_alphanumeric`),
/// 빈 문자열은 유효하지 않은 것으로 간주합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_letters_or_digits;
///
/// assert!(is_letters_or_digits("john42"));
/// assert!(is_letters_or_digits("Иван"));
/// assert!(!is_letters_or_digits("john.doe"));
/// assert!(!is_letters_or_digits(""));
/// ```
pub fn is_letters_or_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphanumeric)
}

/// snake_case 식별자를 PascalCase로 변환합니다.
///
/// 검증 에러의 필드 이름을 클라이언트에 노출되는 형태(`first_name` → `FirstName`)로
/// 바꾸는 데 사용됩니다.
pub fn to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// 쿼리 문자열의 정수 값을 관대하게 역직렬화합니다.
///
/// 값이 없거나 정수로 해석할 수 없으면 `None`을 반환하여
/// 호출 측에서 기본값을 적용할 수 있게 합니다.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse::<i64>().ok()))
}
