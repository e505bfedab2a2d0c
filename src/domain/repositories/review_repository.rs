use async_trait::async_trait;

use super::Pagination;
use crate::core::errors::AppResult;
use crate::domain::entities::reviews::{Review, ReviewTarget};
use crate::domain::value_objects::{ReviewId, UserId};

/// 리뷰 검색 조건
///
/// 평균 평점 범위(`min_rating`..=`max_rating`)는 다섯 항목 평균 기준입니다.
#[derive(Debug, Clone, Default)]
pub struct ReviewSearchCriteria {
    pub target: Option<ReviewTarget>,
    pub author_id: Option<UserId>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ReviewSearchCriteria {
    /// 메모리 구현과 테스트에서 쓰는 조건 판정
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(target) = &self.target {
            if review.target() != target {
                return false;
            }
        }
        if let Some(author_id) = &self.author_id {
            if review.author_id() != author_id {
                return false;
            }
        }
        let average = review.average_rating();
        if self.min_rating.is_some_and(|min| average < min) {
            return false;
        }
        if self.max_rating.is_some_and(|max| average > max) {
            return false;
        }
        true
    }
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: &ReviewId) -> AppResult<Option<Review>>;

    async fn find_by_target(&self, target: &ReviewTarget) -> AppResult<Vec<Review>>;

    async fn find_by_author_id(&self, author_id: &UserId) -> AppResult<Vec<Review>>;

    /// 최신순 정렬된 검색 결과 한 페이지
    async fn search(
        &self,
        criteria: &ReviewSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Review>>;

    async fn count_by_author_id(&self, author_id: &UserId) -> AppResult<u64>;

    async fn has_user_reviewed_target(
        &self,
        author_id: &UserId,
        target: &ReviewTarget,
    ) -> AppResult<bool>;

    /// 신규 저장. (작성자, 대상) 쌍이 이미 있으면 `DuplicateReview`.
    async fn save(&self, review: &Review) -> AppResult<()>;

    async fn update(&self, review: &Review) -> AppResult<()>;

    /// 없는 ID면 `NotFound`.
    async fn delete(&self, id: &ReviewId) -> AppResult<()>;
}
