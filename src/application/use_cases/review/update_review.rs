//! 리뷰 수정 (작성자 본인만)

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::UpdateReviewRequest;
use crate::domain::entities::reviews::Review;
use crate::domain::entities::users::User;
use crate::domain::repositories::ReviewRepository;
use crate::domain::value_objects::ReviewId;

#[derive(Clone)]
pub struct UpdateReviewUseCase {
    review_repo: Arc<dyn ReviewRepository>,
}

impl UpdateReviewUseCase {
    pub fn new(review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repo }
    }

    pub async fn execute(
        &self,
        review_id: &str,
        request: UpdateReviewRequest,
        editor: &User,
    ) -> AppResult<Review> {
        let id = ReviewId::from_string(review_id)?;

        let mut review = self
            .review_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("review {}", id)))?;

        if !review.can_be_edited_by(editor.id()) {
            log::warn!("User {} tried to edit review {}", editor.id(), id);
            return Err(AppError::AccessDenied(
                "only the author can edit this review".to_string(),
            ));
        }

        let ratings = request.ratings.to_ratings()?;
        review.update(request.title, request.content, ratings)?;

        self.review_repo.update(&review).await?;
        log::info!("Review {} updated", id);

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::staff;
    use crate::domain::dto::RatingsInput;
    use crate::domain::entities::reviews::review::tests::ratings;
    use crate::domain::entities::reviews::{ReviewProps, ReviewTarget};
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::CoordinatorId;
    use crate::repositories::memory::InMemoryReviewRepository;

    async fn seeded(author: &User) -> (UpdateReviewUseCase, Arc<InMemoryReviewRepository>, Review) {
        let repo = Arc::new(InMemoryReviewRepository::new());
        let review = Review::create(ReviewProps {
            id: None,
            target: ReviewTarget::Coordinator(CoordinatorId::generate()),
            author_id: author.id().clone(),
            ratings: ratings([3, 3, 3, 3, 3]),
            overall_rating: None,
            work_year: None,
            work_duration: None,
            title: "처음 제목".to_string(),
            content: "처음 작성한 본문입니다. 스무 글자를 넘겨야 합니다.".to_string(),
            is_anonymous: false,
            created_at: None,
            updated_at: None,
        })
        .unwrap();
        repo.save(&review).await.unwrap();

        (UpdateReviewUseCase::new(repo.clone()), repo, review)
    }

    fn request(title: &str, content: &str) -> UpdateReviewRequest {
        UpdateReviewRequest {
            title: title.to_string(),
            content: content.to_string(),
            ratings: RatingsInput {
                professionalism: 5.0,
                communication: 5.0,
                responsibility: 5.0,
                cooperation: 5.0,
                kindness: 5.0,
            },
        }
    }

    #[actix_web::test]
    async fn test_author_updates_review() {
        let author = staff("author@hospital.kr", true);
        let (use_case, repo, review) = seeded(&author).await;

        let updated = use_case
            .execute(
                review.id().value(),
                request("수정된 제목", "다시 생각해보니 훨씬 좋은 동료였습니다. 수정합니다."),
                &author,
            )
            .await
            .unwrap();

        assert_eq!(updated.title(), "수정된 제목");
        assert_eq!(updated.average_rating(), 5.0);

        let stored = repo.find_by_id(review.id()).await.unwrap().unwrap();
        assert_eq!(stored.title(), "수정된 제목");
    }

    #[actix_web::test]
    async fn test_other_user_cannot_edit() {
        let author = staff("author@hospital.kr", true);
        let (use_case, _, review) = seeded(&author).await;
        let other = staff("other@hospital.kr", true);

        let result = use_case
            .execute(
                review.id().value(),
                request("남의 리뷰 수정", "다른 사람이 작성한 리뷰는 고칠 수 없어야 합니다."),
                &other,
            )
            .await;
        assert!(matches!(result, Err(AppError::AccessDenied(_))));
    }

    #[actix_web::test]
    async fn test_invalid_update_keeps_stored_review() {
        let author = staff("author@hospital.kr", true);
        let (use_case, repo, review) = seeded(&author).await;

        let result = use_case
            .execute(review.id().value(), request("짧음", "짧은 본문"), &author)
            .await;
        assert!(matches!(
            result,
            Err(AppError::Validation(DomainError::TooShort { .. }))
        ));

        let stored = repo.find_by_id(review.id()).await.unwrap().unwrap();
        assert_eq!(stored.title(), "처음 제목");
    }

    #[actix_web::test]
    async fn test_missing_review() {
        let author = staff("author@hospital.kr", true);
        let (use_case, _, _) = seeded(&author).await;

        let result = use_case
            .execute(
                ReviewId::generate().value(),
                request("없는 리뷰 수정", "존재하지 않는 리뷰를 수정하려고 시도합니다."),
                &author,
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
