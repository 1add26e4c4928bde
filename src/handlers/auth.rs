//! OAuth Bridge HTTP Handlers
//!
//! 호출자 측 표준 OAuth 2.0 엔드포인트입니다.
//!
//! - `GET /auth/authorize` - 플랫폼 인가 페이지로 302
//! - `GET /auth/callback` - 플랫폼 콜백을 원래 호출자에게 302
//! - `POST /auth/token` - authorization code를 토큰으로 교환
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::{AuthorizeQuery, CallbackQuery, TokenRequest};
use crate::errors::AppError;
use crate::services::OAuthBridgeService;

/// 인가 시작 핸들러
///
/// # Endpoint
/// `GET /auth/authorize?client_id={id}&redirect_uri={uri}&scope={scope}&state={state}`
#[get("/authorize")]
pub async fn authorize(
    req: HttpRequest,
    query: web::Query<AuthorizeQuery>,
    bridge: web::Data<OAuthBridgeService>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let callback_uri = bridge.callback_uri(req.connection_info().host());
    let location = bridge.authorize(&query, &callback_uri)?;

    Ok(redirect(location))
}

/// 플랫폼 콜백 핸들러
///
/// state를 복원하지 못하면 리다이렉트 없이 400을 반환합니다.
///
/// # Endpoint
/// `GET /auth/callback?code={code}&state={state}`
#[get("/callback")]
pub async fn callback(
    query: web::Query<CallbackQuery>,
    bridge: web::Data<OAuthBridgeService>,
) -> Result<HttpResponse, AppError> {
    let location = bridge.callback(&query)?;

    Ok(redirect(location))
}

/// 토큰 교환 핸들러
///
/// # Endpoint
/// `POST /auth/token`
///
/// # Responses
/// - 200 `TokenResponse`
/// - 400 `ServiceError` (플랫폼 비즈니스 에러) 또는 `{"error"}` (입력 오류)
/// - 500 플랫폼 인프라 오류
#[post("/token")]
pub async fn exchange_token(
    payload: web::Json<TokenRequest>,
    bridge: web::Data<OAuthBridgeService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = bridge.exchange_token(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, location))
        .finish()
}
