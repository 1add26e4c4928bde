//! # 비즈니스 프록시 서비스
//!
//! 호출자의 Bearer 토큰을 캐시에서 플랫폼 사용자(`open_id`)로 풀어낸 뒤
//! 인증된 플랫폼 API를 호출하고, 응답을 호출자용 평탄한 구조로 재구성합니다.
//!
//! 캐시에 없는 토큰은 업스트림을 호출하기 전에 `UnknownIdentity`(401)로 실패합니다.

use std::sync::Arc;

use crate::caching::IdentityCache;
use crate::config::PlatformConfig;
use crate::domain::dto::biz::{UserInfoResponse, VideoItem, VideoListQuery, VideoListResponse};
use crate::domain::models::platform::{
    PlatformEnvelope, PlatformUserInfoRequest, PlatformUserInfoResponse, PlatformVideoListResponse,
};
use crate::errors::AppError;
use crate::services::platform_client::PlatformClient;

const ACCESS_TOKEN_HEADER: &str = "access-token";

pub struct BizProxyService {
    client: PlatformClient,
    identities: Arc<IdentityCache>,
    config: PlatformConfig,
}

impl BizProxyService {
    pub fn new(client: PlatformClient, identities: Arc<IdentityCache>, config: PlatformConfig) -> Self {
        Self {
            client,
            identities,
            config,
        }
    }

    pub async fn user_info(&self, access_token: &str) -> Result<UserInfoResponse, AppError> {
        let open_id = self.identities.lookup(access_token)?;

        let request = PlatformUserInfoRequest {
            access_token: access_token.to_string(),
            open_id: open_id.clone(),
        };
        let envelope: PlatformUserInfoResponse = self
            .client
            .post(&self.config.user_info_url, &request)
            .await?;
        envelope.ensure_success().map_err(|e| {
            log::warn!("사용자 정보 조회 거부 - open_id: {}, {}", open_id, e);
            e
        })?;

        let data = envelope.data;
        Ok(UserInfoResponse {
            avatar_url: data.avatar,
            nick: data.nickname,
            open_id: data.open_id,
            union_id: data.union_id,
        })
    }

    /// 동영상 목록을 조회합니다. 제목이 빈 항목은 제외됩니다.
    pub async fn video_list(
        &self,
        access_token: &str,
        query: &VideoListQuery,
    ) -> Result<VideoListResponse, AppError> {
        let open_id = self.identities.lookup(access_token)?;

        let params = [
            ("open_id", open_id.clone()),
            ("cursor", query.cursor.to_string()),
            ("count", query.count.to_string()),
        ];
        let envelope: PlatformVideoListResponse = self
            .client
            .get(
                &self.config.video_list_url,
                &params,
                &[(ACCESS_TOKEN_HEADER, access_token)],
            )
            .await?;
        envelope.ensure_success().map_err(|e| {
            log::warn!(
                "동영상 목록 조회 거부 - open_id: {}, logid: {}, {}",
                open_id,
                envelope.extra.logid.as_deref().unwrap_or("-"),
                e
            );
            e
        })?;

        let data = envelope.data;
        let videos = data
            .list
            .into_iter()
            .filter(|video| !video.title.is_empty())
            .map(|video| VideoItem {
                title: video.title,
                digg_count: video.statistics.digg_count,
                share_count: video.statistics.share_count,
                play_count: video.statistics.play_count,
                comment_count: video.statistics.comment_count,
            })
            .collect();

        Ok(VideoListResponse {
            videos,
            cursor: data.cursor,
            has_more: data.has_more,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpClientConfig;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> (BizProxyService, Arc<IdentityCache>) {
        let identities = Arc::new(IdentityCache::new());
        let config = PlatformConfig {
            user_info_url: format!("{}/oauth/userinfo/", server.uri()),
            video_list_url: format!("{}/video_list/", server.uri()),
            ..PlatformConfig::default()
        };
        let service = BizProxyService::new(
            PlatformClient::new(&HttpClientConfig::default()).unwrap(),
            identities.clone(),
            config,
        );
        (service, identities)
    }

    #[actix_web::test]
    async fn test_user_info_unknown_token_skips_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (service, _) = service(&server);
        let result = service.user_info("never-issued").await;

        assert!(matches!(result, Err(AppError::UnknownIdentity(_))));
    }

    #[actix_web::test]
    async fn test_user_info_reshapes_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/userinfo/"))
            .and(body_json(serde_json::json!({"access_token": "AT1", "open_id": "U1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "error_code": 0,
                    "avatar": "https://cdn.example.com/a.png",
                    "nickname": "nick",
                    "open_id": "U1",
                    "union_id": "UN1"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (service, identities) = service(&server);
        identities.save("AT1", "U1");

        let info = service.user_info("AT1").await.unwrap();
        assert_eq!(
            info,
            UserInfoResponse {
                avatar_url: "https://cdn.example.com/a.png".to_string(),
                nick: "nick".to_string(),
                open_id: "U1".to_string(),
                union_id: "UN1".to_string(),
            }
        );
    }

    #[actix_web::test]
    async fn test_video_list_skips_untitled_videos() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/video_list/"))
            .and(query_param("open_id", "U1"))
            .and(query_param("cursor", "0"))
            .and(query_param("count", "5"))
            .and(header("access-token", "AT1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "list": [
                        {"title": "first", "statistics": {"digg_count": 1, "share_count": 2, "play_count": 3, "comment_count": 4}},
                        {"title": "", "statistics": {"digg_count": 9}}
                    ],
                    "cursor": 10,
                    "has_more": true
                },
                "extra": {"error_code": 0, "description": ""}
            })))
            .mount(&server)
            .await;

        let (service, identities) = service(&server);
        identities.save("AT1", "U1");

        let list = service
            .video_list("AT1", &VideoListQuery::default())
            .await
            .unwrap();

        assert_eq!(list.videos.len(), 1);
        assert_eq!(list.videos[0].title, "first");
        assert_eq!(list.videos[0].comment_count, 4);
        assert_eq!(list.cursor, 10);
        assert!(list.has_more);
    }

    #[actix_web::test]
    async fn test_video_list_business_error_from_extra() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {},
                "extra": {"error_code": 2190008, "description": "access_token expired", "logid": "20261016abc"}
            })))
            .mount(&server)
            .await;

        let (service, identities) = service(&server);
        identities.save("AT1", "U1");

        let result = service.video_list("AT1", &VideoListQuery::default()).await;
        assert!(matches!(
            result,
            Err(AppError::PlatformError { error_code: 2190008, .. })
        ));
    }

    #[actix_web::test]
    async fn test_user_info_business_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/userinfo/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"error_code": 2190008, "description": "expired"}
            })))
            .mount(&server)
            .await;

        let (service, identities) = service(&server);
        identities.save("AT1", "U1");

        let error = service.user_info("AT1").await.unwrap_err();
        assert!(matches!(
            error,
            AppError::PlatformError { error_code: 2190008, ref description } if description == "expired"
        ));

        let response = actix_web::ResponseError::error_response(&error);
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_user_info_upstream_status_is_internal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let (service, identities) = service(&server);
        identities.save("AT1", "U1");

        let error = service.user_info("AT1").await.unwrap_err();
        assert!(matches!(error, AppError::UpstreamStatus { status: 502, .. }));
        assert_eq!(
            actix_web::ResponseError::status_code(&error),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_video_list_upstream_status_is_internal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "extra": {"error_code": 10, "description": "not inspected"}
            })))
            .mount(&server)
            .await;

        let (service, identities) = service(&server);
        identities.save("AT1", "U1");

        let error = service
            .video_list("AT1", &VideoListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::UpstreamStatus { status: 503, .. }));
        assert_eq!(
            actix_web::ResponseError::status_code(&error),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
