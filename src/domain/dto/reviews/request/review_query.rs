use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::reviews::{ReviewTarget, TargetType};
use crate::domain::errors::DomainResult;
use crate::domain::repositories::{Pagination, ReviewSearchCriteria};

/// 리뷰 목록 쿼리 (`GET /api/v1/reviews?targetType=doctor&targetId=...&limit=10`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetReviewsQuery {
    pub target_type: Option<TargetType>,

    pub target_id: Option<String>,

    #[validate(range(min = 1.0, max = 5.0, message = "최소 평점은 1-5 사이여야 합니다"))]
    pub min_rating: Option<f64>,

    #[validate(range(min = 1.0, max = 5.0, message = "최대 평점은 1-5 사이여야 합니다"))]
    pub max_rating: Option<f64>,

    pub limit: Option<u32>,

    pub offset: Option<u32>,
}

impl GetReviewsQuery {
    /// 대상 ID가 있으면 종류(기본 코디네이터)와 함께 검증하여 조건을 만듭니다.
    pub fn to_criteria(&self) -> DomainResult<ReviewSearchCriteria> {
        let target = match &self.target_id {
            Some(id) => Some(ReviewTarget::parse(
                self.target_type.unwrap_or_default(),
                id,
            )?),
            None => None,
        };

        Ok(ReviewSearchCriteria {
            target,
            author_id: None,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        })
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}
