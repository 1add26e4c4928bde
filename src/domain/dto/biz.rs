//! 비즈니스 프록시 응답 DTO
//!
//! 플랫폼의 중첩 응답을 호출자용 평탄한 구조로 재구성한 결과입니다.

use serde::{Deserialize, Serialize};

/// `POST /userInfo` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub avatar_url: String,
    pub nick: String,
    pub open_id: String,
    pub union_id: String,
}

/// `GET /videoList` 쿼리 파라미터
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListQuery {
    #[serde(default)]
    pub cursor: i64,
    #[serde(default = "default_video_count")]
    pub count: i64,
}

impl Default for VideoListQuery {
    fn default() -> Self {
        Self {
            cursor: 0,
            count: default_video_count(),
        }
    }
}

fn default_video_count() -> i64 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub title: String,
    pub digg_count: i64,
    pub share_count: i64,
    pub play_count: i64,
    pub comment_count: i64,
}

/// `GET /videoList` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    pub videos: Vec<VideoItem>,
    /// 다음 페이지 조회에 사용할 커서
    pub cursor: i64,
    pub has_more: bool,
}
