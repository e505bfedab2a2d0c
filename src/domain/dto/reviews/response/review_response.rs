use serde::Serialize;

use crate::domain::entities::reviews::{Review, ReviewSnapshot};
use crate::domain::repositories::Pagination;

/// 리뷰 목록 응답
///
/// 전체 개수는 제공하지 않습니다. 다음 페이지는 `offset + limit`으로 요청합니다.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewSnapshot>,
    pub limit: u32,
    pub offset: u32,
}

impl ReviewListResponse {
    pub fn new(reviews: &[Review], pagination: Pagination) -> Self {
        Self {
            reviews: reviews.iter().map(Review::to_snapshot).collect(),
            limit: pagination.limit,
            offset: pagination.offset,
        }
    }
}
