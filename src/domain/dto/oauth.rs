//! 호출자 측 OAuth DTO
//!
//! 게이트웨이가 외부 호출자에게 노출하는 표준 OAuth 2.0 형태의 요청/응답입니다.
//! 플랫폼 고유 형식은 [`crate::domain::models::platform`]에 있습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `GET /auth/authorize` 쿼리 파라미터
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthorizeQuery {
    #[validate(length(min = 1, message = "client_id가 필요합니다"))]
    #[serde(default)]
    pub client_id: String,

    #[validate(url(message = "redirect_uri는 유효한 URL이어야 합니다"))]
    #[serde(default)]
    pub redirect_uri: String,

    /// `,`, `|`, 공백 중 어떤 구분자로도 나열할 수 있습니다.
    #[serde(default)]
    pub scope: String,

    #[serde(default)]
    pub state: String,

    /// 플랫폼은 항상 code 방식만 사용하므로 값은 무시됩니다.
    #[serde(default)]
    pub response_type: Option<String>,
}

/// `GET /auth/callback` 쿼리 파라미터 (플랫폼이 전달)
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub state: String,
}

/// `POST /auth/token` 요청 본문
///
/// snake_case와 camelCase 필드명을 모두 받습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1, message = "client_id가 필요합니다"))]
    #[serde(alias = "clientId")]
    pub client_id: String,

    #[validate(length(min = 1, message = "client_secret이 필요합니다"))]
    #[serde(alias = "clientSecret")]
    pub client_secret: String,

    #[validate(length(min = 1, message = "code가 필요합니다"))]
    pub code: String,

    #[serde(default, alias = "grantType")]
    pub grant_type: String,
}

/// `POST /auth/token` 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token_type: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    /// 플랫폼 사용자 식별자. 호출자 편의를 위해 함께 노출합니다.
    pub open_id: String,
}

/// 플랫폼 비즈니스 에러를 정규화한 호출자 측 에러 형식
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    pub error_code: i64,
    pub error_description: String,
}
