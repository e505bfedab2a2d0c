//! 리뷰 목록 열람
//!
//! 인증된 관리자이거나 리뷰를 한 건 이상 작성한 인증 사용자만 열람할 수 있습니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::GetReviewsQuery;
use crate::domain::entities::reviews::Review;
use crate::domain::entities::users::User;
use crate::domain::repositories::ReviewRepository;
use crate::domain::services::ReviewAccessService;

#[derive(Clone)]
pub struct GetReviewsUseCase {
    review_repo: Arc<dyn ReviewRepository>,
    access_service: ReviewAccessService,
}

impl GetReviewsUseCase {
    pub fn new(review_repo: Arc<dyn ReviewRepository>, access_service: ReviewAccessService) -> Self {
        Self {
            review_repo,
            access_service,
        }
    }

    pub async fn execute(&self, query: &GetReviewsQuery, viewer: &User) -> AppResult<Vec<Review>> {
        if !self.access_service.can_user_view_reviews(viewer).await? {
            log::warn!("Review listing refused for user {}", viewer.id());
            return Err(AppError::AccessDenied(
                "verified users must write at least one review before viewing others".to_string(),
            ));
        }

        let criteria = query.to_criteria()?;
        self.review_repo.search(&criteria, query.pagination()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{admin, coordinator, staff};
    use crate::domain::entities::reviews::review::tests::ratings;
    use crate::domain::entities::reviews::{ReviewProps, ReviewTarget, TargetType};
    use crate::repositories::memory::InMemoryReviewRepository;

    async fn seeded() -> (GetReviewsUseCase, Arc<InMemoryReviewRepository>, User, String) {
        let repo = Arc::new(InMemoryReviewRepository::new());
        let use_case = GetReviewsUseCase::new(repo.clone(), ReviewAccessService::new(repo.clone()));

        let author = staff("author@hospital.kr", true);
        let target = coordinator("정실장");
        let review = Review::create(ReviewProps {
            id: None,
            target: ReviewTarget::Coordinator(target.id().clone()),
            author_id: author.id().clone(),
            ratings: ratings([4, 4, 4, 4, 4]),
            overall_rating: None,
            work_year: None,
            work_duration: None,
            title: "무난한 협업".to_string(),
            content: "큰 문제 없이 일정 조율이 잘 되었고 소통도 원활했습니다.".to_string(),
            is_anonymous: true,
            created_at: None,
            updated_at: None,
        })
        .unwrap();
        repo.save(&review).await.unwrap();

        (use_case, repo, author, target.id().value().to_string())
    }

    #[actix_web::test]
    async fn test_reviewer_can_list() {
        let (use_case, _, author, target_id) = seeded().await;

        let query = GetReviewsQuery {
            target_type: Some(TargetType::Coordinator),
            target_id: Some(target_id),
            ..Default::default()
        };
        let reviews = use_case.execute(&query, &author).await.unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].to_snapshot().author_id, "anonymous");
    }

    #[actix_web::test]
    async fn test_gate_matrix() {
        let (use_case, _, _, _) = seeded().await;
        let query = GetReviewsQuery::default();

        let newcomer = staff("new@hospital.kr", true);
        assert!(matches!(
            use_case.execute(&query, &newcomer).await,
            Err(AppError::AccessDenied(_))
        ));

        let pending = staff("pending@hospital.kr", false);
        assert!(matches!(
            use_case.execute(&query, &pending).await,
            Err(AppError::AccessDenied(_))
        ));

        let admin = admin("admin@hospital.kr");
        assert_eq!(use_case.execute(&query, &admin).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_rating_filter() {
        let (use_case, _, author, _) = seeded().await;

        let query = GetReviewsQuery {
            min_rating: Some(4.5),
            ..Default::default()
        };
        assert!(use_case.execute(&query, &author).await.unwrap().is_empty());
    }
}
