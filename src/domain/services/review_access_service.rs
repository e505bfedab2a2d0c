//! 리뷰 접근 게이트
//!
//! - 작성: 인증된 사용자만 가능
//! - 열람: 인증된 사용자 중 관리자이거나, 리뷰를 한 건 이상 작성한 사용자만 가능
//!
//! 인증 여부 검사가 관리자 예외보다 먼저입니다. 인증되지 않은 관리자는 열람할 수 없습니다.

use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{User, UserRole};
use crate::domain::repositories::ReviewRepository;

#[derive(Clone)]
pub struct ReviewAccessService {
    review_repo: Arc<dyn ReviewRepository>,
}

impl ReviewAccessService {
    pub fn new(review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repo }
    }

    pub fn can_user_write_review(&self, user: &User) -> bool {
        user.is_verified()
    }

    pub async fn can_user_view_reviews(&self, user: &User) -> AppResult<bool> {
        if !user.is_verified() {
            return Ok(false);
        }

        if user.role() == UserRole::Admin {
            return Ok(true);
        }

        let authored = self.review_repo.count_by_author_id(user.id()).await?;
        Ok(authored > 0)
    }
}
