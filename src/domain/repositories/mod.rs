//! 저장소 계약
//!
//! 유스케이스는 이 트레이트들에만 의존하며, 구체 구현(MongoDB, 메모리)은
//! [`crate::repositories`]에 있습니다. 모든 연산은 비동기이고, 조회 연산은
//! 값이 없을 때 에러 대신 `None`을 돌려줍니다.

pub mod coordinator_repository;
pub mod doctor_repository;
pub mod review_repository;
pub mod user_repository;

use serde::{Deserialize, Serialize};

pub use coordinator_repository::{CoordinatorRepository, CoordinatorSearchCriteria};
pub use doctor_repository::{DoctorRepository, DoctorSearchCriteria};
pub use review_repository::{ReviewRepository, ReviewSearchCriteria};
pub use user_repository::UserRepository;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// limit/offset 페이지네이션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    /// 비어 있는 값은 기본값(20, 0)으로 채우고, limit 은 1..=100 으로 제한합니다.
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    /// 메모리 구현에서 쓰는 슬라이스 헬퍼
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// 부분 일치(대소문자 무시) 검사
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
