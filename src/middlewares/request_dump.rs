//! 요청 덤프 미들웨어
//!
//! 디버그 모드에서 들어오는 요청의 메서드, URI, HTTP 버전, 헤더를 info 레벨로 기록합니다.
//! 플랫폼 연동 중 호출자가 실제로 무엇을 보냈는지 확인할 때 사용합니다.
//!
//! 자격 증명을 담는 헤더(`authorization`, `cookie`, `access-token`)는 값이 마스킹됩니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use crate::config::DebugConfig;
//! use crate::middlewares::RequestDump;
//!
//! App::new()
//!     .wrap(RequestDump::new(DebugConfig::is_debug_mode()))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

use crate::middlewares::request_dump_inner::RequestDumpService;

/// 요청 덤프 미들웨어 팩토리
///
/// 비활성화 상태에서는 요청을 그대로 통과시킵니다.
#[derive(Debug, Clone, Copy)]
pub struct RequestDump {
    enabled: bool,
}

impl RequestDump {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestDump
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestDumpService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestDumpService {
            service: Rc::new(service),
            enabled: self.enabled,
        }))
    }
}
