//! 캐싱 계층
//!
//! Redis에 JSON으로 직렬화한 값을 TTL과 함께 저장합니다. MongoDB 사용자 저장소가
//! `find_by_id` / `find_by_email` 결과를 캐시하는 데 씁니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

pub use self::redis::RedisClient;
