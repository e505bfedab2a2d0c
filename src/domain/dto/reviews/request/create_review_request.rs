use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::reviews::{ReviewRatings, TargetType};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::Rating;

/// 다섯 항목 평점 입력
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RatingsInput {
    pub professionalism: f64,
    pub communication: f64,
    pub responsibility: f64,
    pub cooperation: f64,
    pub kindness: f64,
}

impl RatingsInput {
    /// 각 항목을 `Rating`으로 검증합니다. 첫 번째 실패에서 멈춥니다.
    pub fn to_ratings(&self) -> DomainResult<ReviewRatings> {
        Ok(ReviewRatings {
            professionalism: Rating::create(self.professionalism)?,
            communication: Rating::create(self.communication)?,
            responsibility: Rating::create(self.responsibility)?,
            cooperation: Rating::create(self.cooperation)?,
            kindness: Rating::create(self.kindness)?,
        })
    }
}

/// 리뷰 작성 요청
///
/// `targetType`을 생략하면 코디네이터 리뷰로 처리합니다.
///
/// ```json
/// {
///   "targetType": "doctor",
///   "targetId": "550e8400-e29b-41d4-a716-446655440000",
///   "ratings": {
///     "professionalism": 5, "communication": 4, "responsibility": 5,
///     "cooperation": 4, "kindness": 5
///   },
///   "workYear": 2023,
///   "title": "함께 일하기 좋은 분",
///   "content": "수술 일정 조율이 항상 정확하고 설명이 친절했습니다.",
///   "isAnonymous": true
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[serde(default)]
    pub target_type: TargetType,

    #[validate(length(min = 1, message = "리뷰 대상을 선택해주세요"))]
    pub target_id: String,

    pub ratings: RatingsInput,

    pub overall_rating: Option<f64>,

    #[validate(range(min = 1950, max = 2100, message = "근무 연도가 올바르지 않습니다"))]
    pub work_year: Option<i32>,

    pub work_duration: Option<String>,

    pub title: String,

    pub content: String,

    #[serde(default)]
    pub is_anonymous: bool,
}
