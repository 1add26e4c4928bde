//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET /auth/authorize`, `GET /auth/callback`, `POST /auth/token` - OAuth 브리지
//! - `POST /userInfo`, `GET /videoList` - 비즈니스 프록시 (Bearer)
//! - `GET /openapi.yaml` - OpenAPI 문서
//!
//! 서비스(`OAuthBridgeService`, `BizProxyService`)는 라우트 등록과 별도로
//! `App::app_data`를 통해 주입되어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(bridge))
//!     .app_data(web::Data::new(proxy))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 추출기(JSON 본문, 쿼리) 실패는 `AppError::ValidationError`(400)로 변환됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_biz_routes(cfg);
    configure_asset_routes(cfg);
}

/// OAuth 브리지 라우트
///
/// ```bash
/// # 인가 시작 (브라우저)
/// curl -i "http://localhost:3021/auth/authorize?client_id=ck&redirect_uri=https://app.example.com/cb&scope=user_info&state=xyz"
///
/// # 토큰 교환
/// curl -X POST http://localhost:3021/auth/token \
///   -H "Content-Type: application/json" \
///   -d '{"client_id":"ck","client_secret":"cs","code":"c1","grant_type":"authorization_code"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::authorize)
            .service(handlers::auth::callback)
            .service(handlers::auth::exchange_token)
    );
}

/// 비즈니스 프록시 라우트
///
/// ```bash
/// curl -X POST http://localhost:3021/userInfo -H "Authorization: Bearer AT1"
/// curl "http://localhost:3021/videoList?cursor=0&count=10" -H "Authorization: Bearer AT1"
/// ```
fn configure_biz_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::biz::user_info)
        .service(handlers::biz::video_list);
}

fn configure_asset_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::assets::openapi_spec);
}

// 호출자가 Content-Type 없이 JSON 본문을 보내도 본문 형태만으로 판단합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "platform_oauth_gateway",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
