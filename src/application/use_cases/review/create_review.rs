//! 리뷰 작성
//!
//! 작성 자격(인증 여부) → 대상 존재 → 중복 작성 순서로 확인한 뒤 저장합니다.
//! 인증되지 않은 사용자는 요청 내용과 관계없이 `NotVerified`로 거절됩니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::CreateReviewRequest;
use crate::domain::entities::reviews::{Review, ReviewProps, ReviewTarget};
use crate::domain::entities::users::User;
use crate::domain::repositories::{CoordinatorRepository, DoctorRepository, ReviewRepository};
use crate::domain::services::ReviewAccessService;
use crate::domain::value_objects::Rating;

#[derive(Clone)]
pub struct CreateReviewUseCase {
    review_repo: Arc<dyn ReviewRepository>,
    coordinator_repo: Arc<dyn CoordinatorRepository>,
    doctor_repo: Arc<dyn DoctorRepository>,
    access_service: ReviewAccessService,
}

impl CreateReviewUseCase {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        coordinator_repo: Arc<dyn CoordinatorRepository>,
        doctor_repo: Arc<dyn DoctorRepository>,
        access_service: ReviewAccessService,
    ) -> Self {
        Self {
            review_repo,
            coordinator_repo,
            doctor_repo,
            access_service,
        }
    }

    pub async fn execute(&self, request: CreateReviewRequest, author: &User) -> AppResult<Review> {
        if !self.access_service.can_user_write_review(author) {
            log::warn!("Review refused, user {} is not verified", author.id());
            return Err(AppError::NotVerified);
        }

        let target = ReviewTarget::parse(request.target_type, &request.target_id)?;
        self.ensure_target_exists(&target).await?;

        if self
            .review_repo
            .has_user_reviewed_target(author.id(), &target)
            .await?
        {
            log::warn!(
                "Review refused, user {} already reviewed {} {}",
                author.id(),
                target.target_type(),
                target.id()
            );
            return Err(AppError::DuplicateReview);
        }

        let ratings = request.ratings.to_ratings()?;
        let overall_rating = request.overall_rating.map(Rating::create).transpose()?;

        let review = Review::create(ReviewProps {
            id: None,
            target,
            author_id: author.id().clone(),
            ratings,
            overall_rating,
            work_year: request.work_year,
            work_duration: request.work_duration,
            title: request.title,
            content: request.content,
            is_anonymous: request.is_anonymous,
            created_at: None,
            updated_at: None,
        })?;

        self.review_repo.save(&review).await?;

        log::info!(
            "Review {} created for {} {}",
            review.id(),
            review.target().target_type(),
            review.target().id()
        );
        Ok(review)
    }

    async fn ensure_target_exists(&self, target: &ReviewTarget) -> AppResult<()> {
        let exists = match target {
            ReviewTarget::Coordinator(id) => self.coordinator_repo.find_by_id(id).await?.is_some(),
            ReviewTarget::Doctor(id) => self.doctor_repo.find_by_id(id).await?.is_some(),
        };

        if !exists {
            return Err(AppError::TargetNotFound(format!(
                "{} {}",
                target.target_type(),
                target.id()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::review::test_support::create_request;
    use crate::application::use_cases::test_support::{coordinator, staff};
    use crate::domain::entities::doctors::{Doctor, DoctorProps};
    use crate::domain::entities::reviews::TargetType;
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::DoctorId;
    use crate::repositories::memory::{
        InMemoryCoordinatorRepository, InMemoryDoctorRepository, InMemoryReviewRepository,
    };

    struct Fixture {
        use_case: CreateReviewUseCase,
        reviews: Arc<InMemoryReviewRepository>,
        coordinator_id: String,
        doctor_id: String,
    }

    async fn fixture() -> Fixture {
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let coordinators = Arc::new(InMemoryCoordinatorRepository::new());
        let doctors = Arc::new(InMemoryDoctorRepository::new());

        let coord = coordinator("박실장");
        coordinators.save(&coord).await.unwrap();
        let doctor = Doctor::create(DoctorProps::new("이의사", "서울중앙병원")).unwrap();
        doctors.save(&doctor).await.unwrap();

        let use_case = CreateReviewUseCase::new(
            reviews.clone(),
            coordinators,
            doctors,
            ReviewAccessService::new(reviews.clone()),
        );

        Fixture {
            use_case,
            reviews,
            coordinator_id: coord.id().value().to_string(),
            doctor_id: doctor.id().value().to_string(),
        }
    }

    #[actix_web::test]
    async fn test_verified_user_creates_review() {
        let f = fixture().await;
        let author = staff("writer@hospital.kr", true);

        let review = f
            .use_case
            .execute(create_request(TargetType::Doctor, &f.doctor_id), &author)
            .await
            .unwrap();

        assert_eq!(review.author_id(), author.id());
        assert_eq!(review.target().target_type(), TargetType::Doctor);
        assert!((review.average_rating() - 4.6).abs() < f64::EPSILON);
        assert_eq!(f.reviews.count_by_author_id(author.id()).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_unverified_user_always_refused() {
        let f = fixture().await;
        let author = staff("pending@hospital.kr", false);

        let mut request = create_request(TargetType::Coordinator, &f.coordinator_id);
        request.title = "x".to_string();

        let result = f.use_case.execute(request, &author).await;
        assert!(matches!(result, Err(AppError::NotVerified)));

        let missing_target = create_request(TargetType::Doctor, DoctorId::generate().value());
        let result = f.use_case.execute(missing_target, &author).await;
        assert!(matches!(result, Err(AppError::NotVerified)));
    }

    #[actix_web::test]
    async fn test_missing_target() {
        let f = fixture().await;
        let author = staff("writer@hospital.kr", true);

        let request = create_request(TargetType::Doctor, DoctorId::generate().value());
        let result = f.use_case.execute(request, &author).await;
        assert!(matches!(result, Err(AppError::TargetNotFound(_))));

        // 코디네이터 ID를 의사 대상으로 보내도 찾을 수 없음
        let request = create_request(TargetType::Doctor, &f.coordinator_id);
        let result = f.use_case.execute(request, &author).await;
        assert!(matches!(result, Err(AppError::TargetNotFound(_))));
    }

    #[actix_web::test]
    async fn test_second_review_for_same_target_is_duplicate() {
        let f = fixture().await;
        let author = staff("writer@hospital.kr", true);

        f.use_case
            .execute(create_request(TargetType::Coordinator, &f.coordinator_id), &author)
            .await
            .unwrap();

        let result = f
            .use_case
            .execute(create_request(TargetType::Coordinator, &f.coordinator_id), &author)
            .await;
        assert!(matches!(result, Err(AppError::DuplicateReview)));

        // 다른 대상은 허용
        f.use_case
            .execute(create_request(TargetType::Doctor, &f.doctor_id), &author)
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_validation_failures_propagate() {
        let f = fixture().await;
        let author = staff("writer@hospital.kr", true);

        let mut short = create_request(TargetType::Coordinator, &f.coordinator_id);
        short.content = "짧은 본문".to_string();
        let result = f.use_case.execute(short, &author).await;
        assert!(matches!(
            result,
            Err(AppError::Validation(DomainError::TooShort { .. }))
        ));

        let mut fractional = create_request(TargetType::Coordinator, &f.coordinator_id);
        fractional.ratings.kindness = 3.5;
        let result = f.use_case.execute(fractional, &author).await;
        assert!(matches!(
            result,
            Err(AppError::Validation(DomainError::NotInteger { .. }))
        ));

        assert_eq!(f.reviews.count_by_author_id(author.id()).await.unwrap(), 0);
    }
}
