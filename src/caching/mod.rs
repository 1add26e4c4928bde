//! 캐싱 계층 모듈
//!
//! 토큰 교환 결과로 얻은 플랫폼 사용자 식별자를 메모리에 보관합니다.
//! 영속 저장소가 아니므로 재시작 시 모든 항목이 사라집니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::IdentityCache;
//!
//! let cache = IdentityCache::new();
//! cache.save("access-token", "open-id");
//! let open_id = cache.lookup("access-token")?;
//! ```

pub mod identity_cache;

pub use identity_cache::IdentityCache;
