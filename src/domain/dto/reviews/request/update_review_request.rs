use serde::Deserialize;
use validator::Validate;

use super::RatingsInput;

/// 리뷰 수정 요청 (작성자 본인만 가능)
///
/// 제목/본문 길이 규칙은 작성 때와 같고 `Review::update`가 다시 검사합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1, message = "제목을 입력해주세요"))]
    pub title: String,
    pub content: String,
    pub ratings: RatingsInput,
}
