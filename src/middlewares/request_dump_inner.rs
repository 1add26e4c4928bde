use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::HeaderMap;
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

const MASKED: &str = "***";
const SENSITIVE_HEADERS: [&str; 3] = ["authorization", "cookie", "access-token"];

pub struct RequestDumpService<S> {
    pub service: Rc<S>,
    pub enabled: bool,
}

impl<S, B> Service<ServiceRequest> for RequestDumpService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if self.enabled {
            log::info!(
                "{} {} {:?}\n{}",
                req.method(),
                req.uri(),
                req.version(),
                dump_headers(req.headers())
            );
        }

        let service = self.service.clone();
        Box::pin(async move { service.call(req).await })
    }
}

/// 헤더를 `name: value` 줄 목록으로 직렬화합니다. 민감한 헤더 값은 마스킹됩니다.
fn dump_headers(headers: &HeaderMap) -> String {
    let mut lines: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            let value = if SENSITIVE_HEADERS.contains(&name.as_str()) {
                MASKED
            } else {
                value.to_str().unwrap_or("<binary>")
            };
            format!("{}: {}", name, value)
        })
        .collect();
    lines.sort();
    lines.join("\n")
}
