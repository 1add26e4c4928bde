//! Business Proxy HTTP Handlers
//!
//! `Authorization: Bearer <access_token>`으로 인증되는 플랫폼 API 프록시입니다.
//! 토큰은 `/auth/token`에서 발급된 것이어야 합니다.
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::domain::VideoListQuery;
use crate::errors::AppError;
use crate::services::BizProxyService;
use crate::utils::string_utils::extract_bearer_token;

/// 사용자 정보 조회
///
/// # Endpoint
/// `POST /userInfo`
#[post("/userInfo")]
pub async fn user_info(
    req: HttpRequest,
    proxy: web::Data<BizProxyService>,
) -> Result<HttpResponse, AppError> {
    let access_token = bearer_token(&req)?;
    let info = proxy.user_info(access_token).await?;

    Ok(HttpResponse::Ok().json(info))
}

/// 동영상 목록 조회
///
/// # Endpoint
/// `GET /videoList?cursor={cursor}&count={count}`
#[get("/videoList")]
pub async fn video_list(
    req: HttpRequest,
    query: web::Query<VideoListQuery>,
    proxy: web::Data<BizProxyService>,
) -> Result<HttpResponse, AppError> {
    let access_token = bearer_token(&req)?;
    let videos = proxy.video_list(access_token, &query).await?;

    Ok(HttpResponse::Ok().json(videos))
}

fn bearer_token(req: &HttpRequest) -> Result<&str, AppError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    extract_bearer_token(header)
}
