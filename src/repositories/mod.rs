//! 저장소 구현
//!
//! [`crate::domain::repositories`]의 트레이트를 두 가지 방식으로 구현합니다.
//!
//! - [`mongo`]: MongoDB 컬렉션 + 사용자 조회용 Redis 캐시 (운영 기본값)
//! - [`memory`]: 프로세스 메모리 (`STORAGE_BACKEND=memory`, 테스트)
//!
//! 어느 구현을 쓸지는 [`AppContainer`](crate::core::container::AppContainer)가
//! 시작 시 한 번 결정하며, 유스케이스는 `Arc<dyn ...Repository>`만 봅니다.

pub mod memory;
pub mod mongo;
