//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수값 검증, scope 정규화, Bearer 헤더 파싱, 쿼리 덧붙이기
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{extract_bearer_token, normalize_scope};
//!
//! let scope = normalize_scope("user_info|video.list", ",");
//! let token = extract_bearer_token(Some("Bearer AT1"))?;
//! ```

pub mod string_utils;
