//! 플랫폼 고유 요청/응답 모델
//!
//! 플랫폼은 엔드포인트마다 에러 코드 위치가 다릅니다.
//!
//! | 엔드포인트 | 에러 코드 경로 |
//! |-----------|----------------|
//! | 토큰 교환 | `data.error_code`, `data.description` |
//! | 사용자 정보 | `data.error_code`, `data.description` |
//! | 동영상 목록 | `extra.error_code`, `extra.description` |
//!
//! 각 호출마다 전용 envelope 타입을 두고 [`PlatformEnvelope`]로 에러 경로를 명시합니다.
//! HTTP 200이어도 `error_code != 0`이면 비즈니스 에러입니다.

use serde::{Deserialize, Serialize};

use crate::domain::dto::oauth::TokenRequest;
use crate::errors::AppError;

pub const DEFAULT_GRANT_TYPE: &str = "authorization_code";

/// 중첩 envelope에서 비즈니스 에러 코드를 꺼내는 공통 인터페이스
pub trait PlatformEnvelope {
    fn error_code(&self) -> i64;

    fn description(&self) -> &str;

    /// `error_code == 0`이면 성공, 아니면 `AppError::PlatformError`로 변환합니다.
    fn ensure_success(&self) -> Result<(), AppError> {
        match self.error_code() {
            0 => Ok(()),
            error_code => Err(AppError::PlatformError {
                error_code,
                description: self.description().to_string(),
            }),
        }
    }
}

/// 플랫폼 토큰 교환 요청 (`client_id` 대신 `client_key`를 사용)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformTokenRequest {
    pub client_key: String,
    pub client_secret: String,
    pub code: String,
    pub grant_type: String,
}

impl From<TokenRequest> for PlatformTokenRequest {
    fn from(request: TokenRequest) -> Self {
        let grant_type = if request.grant_type.trim().is_empty() {
            DEFAULT_GRANT_TYPE.to_string()
        } else {
            request.grant_type
        };

        Self {
            client_key: request.client_id,
            client_secret: request.client_secret,
            code: request.code,
            grant_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformTokenResponse {
    pub data: PlatformTokenData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformTokenData {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub description: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: i64,
    pub open_id: Option<String>,
}

impl PlatformEnvelope for PlatformTokenResponse {
    fn error_code(&self) -> i64 {
        self.data.error_code
    }

    fn description(&self) -> &str {
        &self.data.description
    }
}

/// 플랫폼 사용자 정보 조회 요청
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformUserInfoRequest {
    pub access_token: String,
    pub open_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformUserInfoResponse {
    pub data: PlatformUserInfoData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformUserInfoData {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub open_id: String,
    #[serde(default)]
    pub union_id: String,
}

impl PlatformEnvelope for PlatformUserInfoResponse {
    fn error_code(&self) -> i64 {
        self.data.error_code
    }

    fn description(&self) -> &str {
        &self.data.description
    }
}

/// 동영상 목록 응답. 에러 코드는 `extra`에 있습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformVideoListResponse {
    #[serde(default)]
    pub data: PlatformVideoListData,
    pub extra: PlatformExtra,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformVideoListData {
    #[serde(default)]
    pub list: Vec<PlatformVideo>,
    #[serde(default)]
    pub cursor: i64,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformVideo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub statistics: PlatformVideoStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformVideoStatistics {
    #[serde(default)]
    pub digg_count: i64,
    #[serde(default)]
    pub share_count: i64,
    #[serde(default)]
    pub play_count: i64,
    #[serde(default)]
    pub comment_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformExtra {
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub description: String,
    pub logid: Option<String>,
}

impl PlatformEnvelope for PlatformVideoListResponse {
    fn error_code(&self) -> i64 {
        self.extra.error_code
    }

    fn description(&self) -> &str {
        &self.extra.description
    }
}
