//! 도메인 모델 모듈
//!
//! - [`platform`] - 플랫폼 고유 요청/응답 envelope와 에러 코드 추출
//! - [`state`] - 플랫폼을 거쳐 왕복하는 서명된 OAuth state

pub mod platform;
pub mod state;

pub use platform::*;
pub use state::*;
