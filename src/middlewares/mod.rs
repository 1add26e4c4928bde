//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 요청 덤프 미들웨어 (RequestDump)
//! - `DEBUG` 모드에서 요청 라인과 헤더를 로그로 출력
//! - 자격 증명 헤더 값은 마스킹
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::RequestDump;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(RequestDump::new(DebugConfig::is_debug_mode()))
//!         .service(/* 라우트들 */)
//! })
//! ```

pub mod request_dump;
mod request_dump_inner;

pub use request_dump::RequestDump;
