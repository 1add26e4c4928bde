//! 데이터 전송 객체(DTO) 모듈
//!
//! 게이트웨이의 HTTP 표면에서 주고받는 요청/응답 구조체를 정의합니다.
//!
//! - [`oauth`] - 인가/콜백/토큰 교환과 `ServiceError`
//! - [`biz`] - 사용자 정보와 동영상 목록

pub mod oauth;
pub mod biz;

pub use oauth::*;
pub use biz::*;
