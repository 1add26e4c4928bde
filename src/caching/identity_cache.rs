//! 액세스 토큰 → 플랫폼 사용자 식별자(open_id) 캐시
//!
//! 토큰 교환이 성공할 때마다 채워지며, 이후 비즈니스 API 호출에서
//! Bearer 토큰만으로 플랫폼 사용자를 찾을 수 있게 합니다.
//!
//! - 만료(TTL)나 제거 정책이 없습니다. 항목은 프로세스가 살아있는 동안 유지됩니다.
//! - 재시작하면 모든 항목이 사라지며, 호출자는 인증 플로우를 다시 진행해야 합니다.
//! - 하나의 `Mutex`가 읽기/쓰기를 모두 보호합니다. 각 연산은 O(1)입니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::AppError;

/// 프로세스 수명 동안 유지되는 식별자 캐시
///
/// `main`에서 한 번 생성되어 `Arc`로 브리지와 프록시 서비스에 공유됩니다.
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: Mutex<HashMap<String, String>>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰과 사용자 식별자를 저장합니다.
    ///
    /// 같은 토큰이 이미 있으면 조용히 덮어씁니다 (last write wins).
    pub fn save(&self, access_token: &str, open_id: &str) {
        let previous = self
            .entries()
            .insert(access_token.to_string(), open_id.to_string());

        if previous.is_some() {
            log::debug!("기존 액세스 토큰의 식별자를 갱신했습니다");
        }
    }

    /// 토큰에 해당하는 사용자 식별자를 조회합니다.
    ///
    /// 저장된 적 없는 토큰이면 `AppError::UnknownIdentity`를 반환합니다.
    /// 일시적 오류가 아니므로 재시도하지 말고 재인증해야 합니다.
    pub fn lookup(&self, access_token: &str) -> Result<String, AppError> {
        self.entries()
            .get(access_token)
            .cloned()
            .ok_or_else(|| AppError::UnknownIdentity("AccessToken not found".to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    // 패닉으로 잠금이 오염되어도 맵 자체는 항상 일관된 상태이므로 그대로 사용합니다.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
