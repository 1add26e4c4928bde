//! # Server & Runtime Configuration
//!
//! 서버 바인딩, 워커 수, 디버그 모드 등 실행 환경 관련 설정을 제공합니다.
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="3021"
//! export WORKERS="4"
//! export DEBUG="true"     # true | on | enable | 1
//! ```

use std::env;

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3021".to_string())
            .parse()
            .unwrap_or(3021)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        env::var("WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 덤프 등 디버그 동작 설정
pub struct DebugConfig;

impl DebugConfig {
    /// `DEBUG` 환경 변수가 켜져 있는지 확인합니다.
    pub fn is_debug_mode() -> bool {
        env::var("DEBUG")
            .map(|value| Self::parse_flag(&value))
            .unwrap_or(false)
    }

    /// 대소문자 구분 없이 `true`, `on`, `enable`, `1`을 켜짐으로 취급합니다.
    pub fn parse_flag(value: &str) -> bool {
        matches!(
            value.trim().to_lowercase().as_str(),
            "true" | "on" | "enable" | "1"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_values() {
        assert!(DebugConfig::parse_flag("true"));
        assert!(DebugConfig::parse_flag("ON"));
        assert!(DebugConfig::parse_flag("Enable"));
        assert!(DebugConfig::parse_flag("1"));

        assert!(!DebugConfig::parse_flag(""));
        assert!(!DebugConfig::parse_flag("false"));
        assert!(!DebugConfig::parse_flag("yes"));
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3021);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
