//! 도메인 모듈
//!
//! 호출자 측 DTO와 플랫폼 측 모델을 분리해 둡니다. 두 형식 사이의 변환은
//! 서비스 계층([`crate::services`])에서만 일어납니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
