//! # 문자열 유틸리티
//!
//! 요청 파라미터와 헤더를 다루는 공통 문자열 처리 함수들입니다.

use crate::errors::AppError;

const BEARER_SCHEME: &str = "bearer";

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  abc  ", "code").unwrap(), "abc");
/// assert!(validate_required_string("   ", "code").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// scope 목록을 플랫폼 구분자로 다시 이어 붙입니다.
///
/// 호출자는 `,`, `|`, 공백 중 아무 구분자로나 scope를 나열할 수 있습니다.
/// 빈 항목은 버리고 순서는 유지합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_scope;
///
/// assert_eq!(normalize_scope("user_info|video.list", ","), "user_info,video.list");
/// assert_eq!(normalize_scope("", ","), "");
/// ```
pub fn normalize_scope(scope: &str, separator: &str) -> String {
    scope
        .split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
///
/// 스킴은 대소문자를 구분하지 않습니다. 헤더가 없거나, 공백으로 나뉘지 않거나,
/// 스킴이 Bearer가 아니거나, 토큰이 비어 있으면 `InvalidAuthHeader`입니다.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header
        .ok_or_else(|| AppError::InvalidAuthHeader("Authorization 헤더가 없습니다".to_string()))?;

    let (scheme, token) = header.trim().split_once(' ').ok_or_else(|| {
        AppError::InvalidAuthHeader("Authorization 헤더 형식이 올바르지 않습니다".to_string())
    })?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AppError::InvalidAuthHeader(format!(
            "지원하지 않는 인증 스킴입니다: {}",
            scheme
        )));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::InvalidAuthHeader(
            "Bearer 토큰이 비어 있습니다".to_string(),
        ));
    }

    Ok(token)
}

/// 리다이렉트 URI에 쿼리 파라미터를 덧붙입니다.
///
/// 이미 `?`가 있으면 `&`로 이어 붙여 기존 파라미터를 보존합니다.
/// 값은 퍼센트 인코딩됩니다.
pub fn append_query(uri: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        return uri.to_string();
    }

    // 프래그먼트는 쿼리 뒤에 와야 합니다.
    let (base, fragment) = match uri.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (uri, None),
    };

    let separator = if base.contains('?') { '&' } else { '?' };
    match fragment {
        Some(fragment) => format!("{}{}{}#{}", base, separator, query, fragment),
        None => format!("{}{}{}", base, separator, query),
    }
}
