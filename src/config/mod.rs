//! # Configuration Module
//!
//! 게이트웨이의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 시작 시점에 한 번 읽어 각 서비스에 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩, 워커 수, 디버그 모드
//! - [`auth_config`] - 플랫폼 OAuth 엔드포인트, 업스트림 HTTP 클라이언트, state 서명
//!
//! ## 환경 파일
//!
//! `PROFILE` 환경 변수에 따라 `.env.dev`, `.env.prod`, `.env` 중 하나가 로드됩니다
//! (`main.rs`의 `load_env_file` 참고).

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
