//! 정적 자산 핸들러
use actix_web::http::header;
use actix_web::{get, HttpResponse};

const OPENAPI_SPEC_YAML: &str = include_str!("../assets/openapi.yaml");

/// 번들된 OpenAPI 문서
///
/// 외부 도구가 브라우저에서 직접 가져갈 수 있도록 모든 Origin을 허용합니다.
///
/// # Endpoint
/// `GET /openapi.yaml`
#[get("/openapi.yaml")]
pub async fn openapi_spec() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/yaml; charset=utf-8")
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .body(OPENAPI_SPEC_YAML)
}
