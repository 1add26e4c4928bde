//! 플랫폼 OAuth 게이트웨이
//!
//! 외부 호출자에게는 표준 OAuth 2.0 authorization code 플로우를 제공하고,
//! 내부적으로는 서드파티 플랫폼의 고유 OAuth 방언(다른 파라미터 이름, 다른 토큰 엔드포인트,
//! 다른 에러 envelope)을 호출하는 프로토콜 브리지입니다.
//!
//! 발급된 액세스 토큰과 플랫폼 사용자 식별자(`open_id`)의 매핑을 메모리에 캐시하여
//! 이후 프로필/동영상 목록 호출이 식별자를 다시 협상하지 않도록 합니다.
//!
//! # Features
//!
//! - **OAuth 브리지**: 인가 리다이렉트, 콜백 중계, 토큰 교환, 에러 형식 정규화
//! - **서명된 state**: 호출자 컨텍스트를 HMAC 서명된 state로 플랫폼을 거쳐 왕복
//! - **식별자 캐시**: 스레드 안전한 access_token → open_id 매핑 (재시작 시 소멸)
//! - **비즈니스 프록시**: Bearer 토큰으로 사용자 정보, 동영상 목록 조회
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 입력 추출/검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Services     │ ──► │  IdentityCache  │
//! └─────────────────┘     └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PlatformClient  │ ← 공유 커넥션 풀
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Third-party    │
//! │   platform      │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use platform_oauth_gateway::services::{OAuthBridgeService, PlatformClient};
//!
//! let client = PlatformClient::new(&HttpClientConfig::from_env())?;
//! let bridge = OAuthBridgeService::new(client, identities, codec, platform);
//! let token = bridge.exchange_token(request).await?;
//! ```

pub mod config;
pub mod caching;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
