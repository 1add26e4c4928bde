//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//! 공유 상태는 식별자 캐시와 업스트림 커넥션 풀뿐입니다.
//!
//! - [`platform_client`] - 공유 커넥션 풀 기반 업스트림 JSON 클라이언트
//! - [`oauth_bridge`] - 인가/콜백/토큰 교환 브리지
//! - [`biz_proxy`] - 캐시된 식별자를 이용한 플랫폼 API 프록시
//!
//! # Examples
//!
//! ```rust,ignore
//! let client = PlatformClient::new(&HttpClientConfig::from_env())?;
//! let identities = Arc::new(IdentityCache::new());
//! let bridge = OAuthBridgeService::new(client.clone(), identities.clone(), codec, platform.clone());
//! let proxy = BizProxyService::new(client, identities, platform);
//! ```

pub mod platform_client;
pub mod oauth_bridge;
pub mod biz_proxy;

pub use platform_client::PlatformClient;
pub use oauth_bridge::OAuthBridgeService;
pub use biz_proxy::BizProxyService;
