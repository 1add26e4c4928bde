//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 게이트웨이의 모든 실패를 하나의 `AppError`로 모으고,
//! `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | AppError | HTTP Status |
//! |------|----------|-------------|
//! | 클라이언트 입력 오류 | `ValidationError`, `InvalidState` | 400 |
//! | 인증 헤더 오류 | `InvalidAuthHeader` | 401 |
//! | 식별자 미존재 | `UnknownIdentity` | 401 |
//! | 플랫폼 비즈니스 오류 | `PlatformError` | 400 (`ServiceError` 형식) |
//! | 플랫폼 인프라 오류 | `UpstreamStatus`, `ExternalServiceError` | 500 |
//! | 내부 오류 | `InternalError` | 500 |
//!
//! 어떤 에러도 자동 재시도되지 않습니다. 모든 실패는 현재 요청에서 종료되며
//! 호출자에게 그대로 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require_code(code: &str) -> Result<(), AppError> {
//!     if code.is_empty() {
//!         return Err(AppError::ValidationError("code는 필수입니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::oauth::ServiceError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 콜백으로 돌아온 state를 복원할 수 없음 (400 Bad Request)
    #[error("Invalid OAuth state: {0}")]
    InvalidState(String),

    /// Authorization 헤더가 없거나 Bearer 형식이 아님 (401 Unauthorized)
    #[error("Invalid authorization header: {0}")]
    InvalidAuthHeader(String),

    /// 액세스 토큰에 해당하는 플랫폼 사용자가 캐시에 없음 (401 Unauthorized)
    ///
    /// 호출자는 인증 플로우를 처음부터 다시 진행해야 합니다.
    #[error("Unknown identity: {0}")]
    UnknownIdentity(String),

    /// 플랫폼이 HTTP 200과 함께 0이 아닌 error_code를 반환함 (400 Bad Request)
    #[error("Platform error {error_code}: {description}")]
    PlatformError {
        error_code: i64,
        description: String,
    },

    /// 플랫폼이 200 이외의 HTTP 상태를 반환함 (500 Internal Server Error)
    #[error("Upstream status({status}) is not ok, body({body})")]
    UpstreamStatus { status: u16, body: String },

    /// 전송 실패, 잘못된 JSON 등 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidState(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidAuthHeader(_) | AppError::UnknownIdentity(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::PlatformError { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 플랫폼 비즈니스 에러는 OAuth 호출자가 기대하는 `ServiceError` 형식
    /// (`error_code`, `error_description`)으로, 나머지는 `{"error": "..."}` 형식으로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        match self {
            AppError::PlatformError {
                error_code,
                description,
            } => actix_web::HttpResponse::build(status).json(ServiceError {
                error_code: *error_code,
                error_description: description.clone(),
            }),
            _ => actix_web::HttpResponse::build(status).json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
