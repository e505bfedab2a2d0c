//! 리뷰 작성/열람/수정 유스케이스

pub mod create_review;
pub mod get_reviews;
pub mod update_review;

pub use create_review::CreateReviewUseCase;
pub use get_reviews::GetReviewsUseCase;
pub use update_review::UpdateReviewUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::dto::{CreateReviewRequest, RatingsInput};
    use crate::domain::entities::reviews::TargetType;

    pub(crate) fn create_request(target_type: TargetType, target_id: &str) -> CreateReviewRequest {
        CreateReviewRequest {
            target_type,
            target_id: target_id.to_string(),
            ratings: RatingsInput {
                professionalism: 5.0,
                communication: 4.0,
                responsibility: 5.0,
                cooperation: 4.0,
                kindness: 5.0,
            },
            overall_rating: Some(5.0),
            work_year: Some(2024),
            work_duration: Some("1년".to_string()),
            title: "믿고 맡길 수 있는 분".to_string(),
            content: "수술 일정 조율과 환자 안내가 항상 정확하고 친절했습니다.".to_string(),
            is_anonymous: false,
        }
    }
}
