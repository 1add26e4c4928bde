//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 입력 추출과 검증만 담당하고, 실제 처리는 `web::Data`로 주입된
//! 서비스에 위임합니다. 모든 실패는 `AppError`로 반환되어
//! `ResponseError` 구현에 의해 HTTP 응답으로 변환됩니다.
//!
//! # Modules
//!
//! - [`auth`] - `/auth/authorize`, `/auth/callback`, `/auth/token`
//! - [`biz`] - `/userInfo`, `/videoList`
//! - [`assets`] - `/openapi.yaml`
//!
//! # Examples
//!
//! ```rust,ignore
//! #[post("/token")]
//! pub async fn exchange_token(
//!     payload: web::Json<TokenRequest>,
//!     bridge: web::Data<OAuthBridgeService>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let response = bridge.exchange_token(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```

pub mod auth;
pub mod biz;
pub mod assets;
