//! # 플랫폼 HTTP 클라이언트
//!
//! 모든 업스트림 호출이 공유하는 커넥션 풀 기반 JSON 클라이언트입니다.
//!
//! ## 실패 판정 순서
//!
//! 1. 전송 실패 (연결/타임아웃) → `AppError::ExternalServiceError` (500)
//! 2. HTTP 상태가 200이 아님 → `AppError::UpstreamStatus` (500), 본문은 로그와 메시지에 포함
//! 3. 본문이 기대한 JSON 형태가 아님 → `AppError::ExternalServiceError` (500)
//!
//! 200 응답 안의 비즈니스 에러 코드 판정은 호출자가 envelope 타입별로 수행합니다
//! ([`crate::domain::models::platform::PlatformEnvelope`]).
//!
//! 재시도는 하지 않습니다.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::HttpClientConfig;
use crate::errors::{AppError, AppResult, ErrorContext};

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// 업스트림 JSON 클라이언트
///
/// 내부 `reqwest::Client`가 `Arc` 기반이므로 복제해도 같은 커넥션 풀을 공유합니다.
/// 프로세스 시작 시 한 번만 생성하세요.
#[derive(Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
}

impl PlatformClient {
    /// 설정에 따라 커넥션 풀과 타임아웃을 구성합니다.
    pub fn new(config: &HttpClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .context("업스트림 HTTP 클라이언트 생성 실패")?;

        log::info!(
            "업스트림 HTTP 클라이언트 초기화: max_idle_per_host={}, idle_timeout={:?}, connect_timeout={:?}, request_timeout={:?}",
            config.max_idle_per_host,
            config.idle_timeout,
            config.connect_timeout,
            config.request_timeout
        );

        Ok(Self { http })
    }

    /// JSON 본문을 POST하고 응답을 `Resp`로 디코딩합니다.
    pub async fn post<Req, Resp>(&self, url: &str, body: &Req) -> AppResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)
            .with_context(|| format!("POST {} 요청 직렬화 실패", url))?;

        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(payload);

        self.execute("POST", url, request).await
    }

    /// 쿼리 파라미터와 추가 헤더로 GET하고 응답을 `Resp`로 디코딩합니다.
    pub async fn get<Resp>(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, &str)],
    ) -> AppResult<Resp>
    where
        Resp: DeserializeOwned,
    {
        let mut request = self.http.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        self.execute("GET", url, request).await
    }

    async fn execute<Resp>(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> AppResult<Resp>
    where
        Resp: DeserializeOwned,
    {
        log::debug!("업스트림 요청: {} {}", method, url);

        let response = request.send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("{} {} 요청 실패: {}", method, url, e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!("{} {} 응답 읽기 실패: {}", method, url, e))
        })?;

        if status != StatusCode::OK {
            log::error!("업스트림 상태 오류: {} {} -> {}, body={}", method, url, status, body);
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<Resp>(&body).map_err(|e| {
            AppError::ExternalServiceError(format!(
                "{} {} 응답 파싱 실패: {}, body={}",
                method, url, e, body
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        value: String,
    }

    fn client() -> PlatformClient {
        PlatformClient::new(&HttpClientConfig::default()).unwrap()
    }

    #[actix_web::test]
    async fn test_post_sends_json_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("content-type", JSON_CONTENT_TYPE))
            .and(body_json(serde_json::json!({"code": "c1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let result: Echo = client()
            .post(&format!("{}/token", server.uri()), &serde_json::json!({"code": "c1"}))
            .await
            .unwrap();

        assert_eq!(result.value, "ok");
    }

    #[actix_web::test]
    async fn test_get_sends_query_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("cursor", "0"))
            .and(header("access-token", "AT1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": "list"})))
            .mount(&server)
            .await;

        let result: Echo = client()
            .get(
                &format!("{}/videos", server.uri()),
                &[("cursor", "0".to_string())],
                &[("access-token", "AT1")],
            )
            .await
            .unwrap();

        assert_eq!(result.value, "list");
    }

    #[actix_web::test]
    async fn test_non_ok_status_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let result: Result<Echo, _> = client()
            .post(&server.uri(), &serde_json::json!({}))
            .await;

        match result {
            Err(AppError::UpstreamStatus { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("Expected UpstreamStatus, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result: Result<Echo, _> = client().get(&server.uri(), &[], &[]).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
