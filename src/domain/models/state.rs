//! OAuth state 래핑
//!
//! 호출자의 `state`, `client_id`, `redirect_uri`를 하나의 불투명 문자열로 감싸
//! 플랫폼의 `state` 파라미터로 보냅니다. 플랫폼은 이 문자열을 그대로 돌려줄 뿐이므로
//! 콜백에서 이를 복원하면 원래 호출자에게 다시 리다이렉트할 수 있습니다.
//!
//! ## 형식
//!
//! ```text
//! base64url(json{"v":1,"state":..,"client_id":..,"redirect_uri":..}) "." base64url(HMAC-SHA256)
//! ```
//!
//! - `v`가 [`STATE_VERSION`]과 다르면 추측하지 않고 거부합니다.
//! - 서명이 맞지 않거나 형식이 깨진 값은 모두 `AppError::InvalidState`입니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::errors::AppError;

type HmacSha256 = Hmac<Sha256>;

/// 현재 발급하는 state 형식 버전
pub const STATE_VERSION: u8 = 1;

/// 인가 요청 시점의 호출자 컨텍스트
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationState {
    pub state: String,
    pub client_id: String,
    pub redirect_uri: String,
}

#[derive(Serialize, Deserialize)]
struct VersionedState {
    v: u8,
    #[serde(flatten)]
    payload: AuthorizationState,
}

/// `AuthorizationState` 인코더/디코더
///
/// 인코딩한 값을 같은 시크릿으로 디코딩하면 원래 값과 정확히 같아야 합니다.
#[derive(Clone)]
pub struct StateCodec {
    secret: Vec<u8>,
}

impl StateCodec {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn encode(&self, state: &AuthorizationState) -> Result<String, AppError> {
        let versioned = VersionedState {
            v: STATE_VERSION,
            payload: state.clone(),
        };
        let json = serde_json::to_vec(&versioned)
            .map_err(|e| AppError::InternalError(format!("state 직렬화 실패: {}", e)))?;

        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = URL_SAFE_NO_PAD.encode(self.sign(payload.as_bytes())?);

        Ok(format!("{}.{}", payload, signature))
    }

    pub fn decode(&self, raw: &str) -> Result<AuthorizationState, AppError> {
        let (payload, signature) = raw
            .split_once('.')
            .ok_or_else(|| AppError::InvalidState("형식이 올바르지 않습니다".to_string()))?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AppError::InvalidState("서명 인코딩이 올바르지 않습니다".to_string()))?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AppError::InvalidState("서명이 일치하지 않습니다".to_string()))?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| AppError::InvalidState("페이로드 인코딩이 올바르지 않습니다".to_string()))?;
        let versioned: VersionedState = serde_json::from_slice(&json)
            .map_err(|e| AppError::InvalidState(format!("페이로드 파싱 실패: {}", e)))?;

        if versioned.v != STATE_VERSION {
            return Err(AppError::InvalidState(format!(
                "지원하지 않는 state 버전입니다: {}",
                versioned.v
            )));
        }

        Ok(versioned.payload)
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, AppError> {
        let mut mac = self.mac()?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn mac(&self) -> Result<HmacSha256, AppError> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::InternalError(format!("HMAC 키 초기화 실패: {}", e)))
    }
}
