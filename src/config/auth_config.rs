//! # Platform OAuth Configuration Module
//!
//! 외부 플랫폼(Douyin Open Platform) OAuth 엔드포인트, 업스트림 HTTP 클라이언트,
//! OAuth state 서명 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ### 플랫폼 엔드포인트
//! ```bash
//! export PLATFORM_AUTHORIZE_URL="https://open.douyin.com/platform/oauth/connect/"
//! export PLATFORM_TOKEN_URL="https://open.douyin.com/oauth/access_token/"
//! export PLATFORM_USER_INFO_URL="https://open.douyin.com/oauth/userinfo/"
//! export PLATFORM_VIDEO_LIST_URL="https://open.douyin.com/api/douyin/v1/video/video_list/"
//! export PLATFORM_SCOPE_SEPARATOR=","
//! export GATEWAY_CALLBACK_URL="https://gateway.example.com/auth/callback"  # 선택
//! ```
//!
//! ### 업스트림 HTTP 클라이언트
//! ```bash
//! export UPSTREAM_MAX_IDLE_PER_HOST="100"
//! export UPSTREAM_IDLE_TIMEOUT_SECS="90"
//! export UPSTREAM_CONNECT_TIMEOUT_SECS="10"
//! export UPSTREAM_REQUEST_TIMEOUT_SECS="60"
//! ```
//!
//! ### OAuth 보안 설정
//! ```bash
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{HttpClientConfig, OAuthConfig, PlatformConfig};
//!
//! let platform = PlatformConfig::from_env();
//! let http = HttpClientConfig::from_env();
//! let secret = OAuthConfig::state_secret();
//! ```

use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://open.douyin.com/platform/oauth/connect/";
pub const DEFAULT_TOKEN_URL: &str = "https://open.douyin.com/oauth/access_token/";
pub const DEFAULT_USER_INFO_URL: &str = "https://open.douyin.com/oauth/userinfo/";
pub const DEFAULT_VIDEO_LIST_URL: &str = "https://open.douyin.com/api/douyin/v1/video/video_list/";
pub const DEFAULT_SCOPE_SEPARATOR: &str = ",";

/// 외부 플랫폼 OAuth/API 엔드포인트 설정
///
/// 프로세스 시작 시 한 번 로드되어 브리지와 프록시 서비스에 주입됩니다.
/// 테스트에서는 필드를 직접 채워 mock 서버를 가리키게 할 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformConfig {
    /// 사용자를 리다이렉트할 플랫폼 인가 페이지
    pub authorize_url: String,
    /// authorization code를 토큰으로 교환하는 엔드포인트
    pub token_url: String,
    /// 사용자 정보 조회 엔드포인트
    pub user_info_url: String,
    /// 동영상 목록 조회 엔드포인트
    pub video_list_url: String,
    /// 플랫폼이 기대하는 scope 구분자
    pub scope_separator: String,
    /// 플랫폼에 등록된 게이트웨이 콜백 URL.
    /// 없으면 요청의 Host 헤더로 `https://{host}/auth/callback`을 구성합니다.
    pub callback_url: Option<String>,
}

impl PlatformConfig {
    /// 환경 변수에서 플랫폼 설정을 로드합니다.
    pub fn from_env() -> Self {
        Self {
            authorize_url: env_or("PLATFORM_AUTHORIZE_URL", DEFAULT_AUTHORIZE_URL),
            token_url: env_or("PLATFORM_TOKEN_URL", DEFAULT_TOKEN_URL),
            user_info_url: env_or("PLATFORM_USER_INFO_URL", DEFAULT_USER_INFO_URL),
            video_list_url: env_or("PLATFORM_VIDEO_LIST_URL", DEFAULT_VIDEO_LIST_URL),
            scope_separator: env_or("PLATFORM_SCOPE_SEPARATOR", DEFAULT_SCOPE_SEPARATOR),
            callback_url: env::var("GATEWAY_CALLBACK_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// 게이트웨이 콜백 URL을 결정합니다.
    pub fn callback_url_for_host(&self, host: &str) -> String {
        match &self.callback_url {
            Some(url) => url.clone(),
            None => format!("https://{}/auth/callback", host),
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            user_info_url: DEFAULT_USER_INFO_URL.to_string(),
            video_list_url: DEFAULT_VIDEO_LIST_URL.to_string(),
            scope_separator: DEFAULT_SCOPE_SEPARATOR.to_string(),
            callback_url: None,
        }
    }
}

/// 업스트림 HTTP 클라이언트 전송 계층 설정
///
/// 프로세스당 하나의 커넥션 풀을 구성하는 데 사용됩니다.
/// 요청마다 클라이언트를 새로 만들면 소켓이 누수되므로 반드시 공유해야 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    pub max_idle_per_host: usize,
    pub idle_timeout: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl HttpClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_idle_per_host: env_parse("UPSTREAM_MAX_IDLE_PER_HOST", defaults.max_idle_per_host),
            idle_timeout: Duration::from_secs(env_parse(
                "UPSTREAM_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )),
            connect_timeout: Duration::from_secs(env_parse(
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )),
            request_timeout: Duration::from_secs(env_parse(
                "UPSTREAM_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 100,
            idle_timeout: Duration::from_secs(90),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// OAuth state 서명 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// state 토큰 HMAC 서명에 사용할 시크릿을 반환합니다.
    ///
    /// 여러 인스턴스로 배포할 경우 모든 인스턴스가 같은 값을 가져야
    /// 다른 인스턴스가 발급한 state를 콜백에서 복원할 수 있습니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_trimmed(&raw).unwrap_or_else(|| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_trimmed<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_config_defaults() {
        let config = PlatformConfig::default();

        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.scope_separator, ",");
        assert!(config.callback_url.is_none());
    }

    #[test]
    fn test_callback_url_from_host() {
        let config = PlatformConfig::default();
        assert_eq!(
            config.callback_url_for_host("gw.example.com"),
            "https://gw.example.com/auth/callback"
        );
    }

    #[test]
    fn test_configured_callback_url_wins() {
        let config = PlatformConfig {
            callback_url: Some("https://fixed.example.com/auth/callback".to_string()),
            ..PlatformConfig::default()
        };
        assert_eq!(
            config.callback_url_for_host("ignored.example.com"),
            "https://fixed.example.com/auth/callback"
        );
    }

    #[test]
    fn test_http_client_defaults() {
        let config = HttpClientConfig::default();

        assert_eq!(config.max_idle_per_host, 100);
        assert_eq!(config.idle_timeout, Duration::from_secs(90));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_parse_trimmed() {
        assert_eq!(parse_trimmed::<u64>(" 42 "), Some(42));
        assert_eq!(parse_trimmed::<u64>("abc"), None);
    }
}
