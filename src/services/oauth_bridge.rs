//! # OAuth 브리지 서비스
//!
//! 호출자에게는 표준 OAuth 2.0 authorization code 플로우를 제공하고,
//! 내부적으로는 플랫폼 고유 OAuth 방언으로 변환해 호출합니다.
//!
//! ```text
//! 호출자                      게이트웨이                         플랫폼
//!   │ GET /auth/authorize        │                                 │
//!   ├───────────────────────────►│ state 래핑, scope 정규화         │
//!   │ 302 플랫폼 인가 페이지       │                                 │
//!   │◄───────────────────────────┤                                 │
//!   │                            │     GET /auth/callback          │
//!   │                            │◄────────────────────────────────┤
//!   │ 302 원래 redirect_uri       │ state 복원                       │
//!   │◄───────────────────────────┤                                 │
//!   │ POST /auth/token           │                                 │
//!   ├───────────────────────────►│  client_key 형식으로 토큰 교환     │
//!   │                            ├────────────────────────────────►│
//!   │                            │◄────────────────────────────────┤
//!   │ 200 토큰 / 400 / 500        │ 성공 시 access_token → open_id 캐시
//!   │◄───────────────────────────┤                                 │
//! ```
//!
//! 어느 단계에서도 재시도하지 않습니다.

use std::sync::Arc;

use crate::caching::IdentityCache;
use crate::config::PlatformConfig;
use crate::domain::dto::oauth::{AuthorizeQuery, CallbackQuery, TokenRequest, TokenResponse};
use crate::domain::models::platform::{
    PlatformEnvelope, PlatformTokenRequest, PlatformTokenResponse,
};
use crate::domain::models::state::{AuthorizationState, StateCodec};
use crate::errors::AppError;
use crate::services::platform_client::PlatformClient;
use crate::utils::string_utils::{append_query, normalize_scope, validate_required_string};

const TOKEN_TYPE: &str = "bearer";

pub struct OAuthBridgeService {
    client: PlatformClient,
    identities: Arc<IdentityCache>,
    codec: StateCodec,
    config: PlatformConfig,
}

impl OAuthBridgeService {
    pub fn new(
        client: PlatformClient,
        identities: Arc<IdentityCache>,
        codec: StateCodec,
        config: PlatformConfig,
    ) -> Self {
        Self {
            client,
            identities,
            codec,
            config,
        }
    }

    /// 플랫폼에 등록할 게이트웨이 콜백 URL
    pub fn callback_uri(&self, host: &str) -> String {
        self.config.callback_url_for_host(host)
    }

    /// 플랫폼 인가 페이지 URL을 생성합니다.
    ///
    /// 호출자의 `state`, `client_id`, `redirect_uri`는 서명된 state 하나로 감싸지고,
    /// 플랫폼에는 `redirect_uri`로 게이트웨이 콜백(`callback_uri`)이 전달됩니다.
    pub fn authorize(&self, query: &AuthorizeQuery, callback_uri: &str) -> Result<String, AppError> {
        let wrapped = self.codec.encode(&AuthorizationState {
            state: query.state.clone(),
            client_id: query.client_id.clone(),
            redirect_uri: query.redirect_uri.clone(),
        })?;

        let scope = normalize_scope(&query.scope, &self.config.scope_separator);

        let params = [
            ("client_key", query.client_id.as_str()),
            ("response_type", "code"),
            ("scope", scope.as_str()),
            ("redirect_uri", callback_uri),
            ("state", wrapped.as_str()),
        ];

        let url = append_query(&self.config.authorize_url, &params);
        log::info!(
            "플랫폼 인가 페이지로 리다이렉트 - client_id: {}, scope: {}",
            query.client_id,
            scope
        );

        Ok(url)
    }

    /// 플랫폼 콜백을 원래 호출자의 `redirect_uri`로 되돌립니다.
    ///
    /// state를 복원할 수 없으면 리다이렉트하지 않고 실패합니다.
    pub fn callback(&self, query: &CallbackQuery) -> Result<String, AppError> {
        let original = self.codec.decode(&query.state).map_err(|e| {
            log::warn!("콜백 state 복원 실패: {}", e);
            e
        })?;
        let code = validate_required_string(&query.code, "code")?;

        let url = append_query(
            &original.redirect_uri,
            &[("code", code.as_str()), ("state", original.state.as_str())],
        );
        log::info!(
            "호출자에게 콜백 전달 - client_id: {}, redirect_uri: {}",
            original.client_id,
            original.redirect_uri
        );

        Ok(url)
    }

    /// authorization code를 플랫폼 토큰으로 교환합니다.
    ///
    /// 성공 시에만 `access_token → open_id`를 캐시에 저장합니다.
    /// - HTTP 200이 아니면 500, 캐시는 변경되지 않습니다.
    /// - `data.error_code != 0`이면 400 `ServiceError`.
    pub async fn exchange_token(&self, request: TokenRequest) -> Result<TokenResponse, AppError> {
        let client_id = request.client_id.clone();
        let upstream = PlatformTokenRequest::from(request);

        let envelope: PlatformTokenResponse = self
            .client
            .post(&self.config.token_url, &upstream)
            .await?;

        if let Err(e) = envelope.ensure_success() {
            log::warn!("플랫폼 토큰 교환 거부 - client_id: {}, {}", client_id, e);
            return Err(e);
        }

        let data = envelope.data;
        let (access_token, open_id) = match (data.access_token, data.open_id) {
            (Some(access_token), Some(open_id))
                if !access_token.is_empty() && !open_id.is_empty() =>
            {
                (access_token, open_id)
            }
            _ => {
                return Err(AppError::ExternalServiceError(
                    "플랫폼 토큰 응답에 access_token 또는 open_id가 없습니다".to_string(),
                ));
            }
        };

        self.identities.save(&access_token, &open_id);
        log::info!("토큰 발급 완료 - client_id: {}, open_id: {}", client_id, open_id);

        Ok(TokenResponse {
            token_type: TOKEN_TYPE.to_string(),
            access_token,
            refresh_token: data.refresh_token.unwrap_or_default(),
            expires_in: data.expires_in,
            open_id,
        })
    }
}
