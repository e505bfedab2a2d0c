//! # 애플리케이션 컨테이너
//!
//! 시작 시 저장소 구현을 고르고, 서비스와 유스케이스를 한 번 조립해
//! `web::Data<AppContainer>`로 모든 워커에 공유합니다.
//!
//! ```rust,ignore
//! let repositories = match StorageConfig::backend() {
//!     StorageBackend::Memory => Repositories::in_memory(),
//!     StorageBackend::MongoDb => Repositories::mongo(&database, redis).await?,
//! };
//! let container = web::Data::new(AppContainer::from_config(repositories));
//!
//! HttpServer::new(move || App::new().app_data(container.clone()) /* ... */);
//! ```

use std::sync::Arc;

use crate::application::use_cases::{
    CreateReviewUseCase, GetReviewsUseCase, LoginUserUseCase, RegisterUserUseCase,
    ReviewUserVerificationUseCase, SearchCoordinatorsUseCase, SearchDoctorsUseCase,
    SeedAdminUseCase, UpdateReviewUseCase,
};
use crate::caching::RedisClient;
use crate::config::{VerificationConfig, VerificationPolicyKind};
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::repositories::{
    CoordinatorRepository, DoctorRepository, ReviewRepository, UserRepository,
};
use crate::domain::services::{
    ManualReviewPolicy, ProviderBackedPolicy, ReviewAccessService, UserVerificationService,
    VerificationPolicy,
};
use crate::repositories::memory::{
    InMemoryCoordinatorRepository, InMemoryDoctorRepository, InMemoryReviewRepository,
    InMemoryUserRepository,
};
use crate::repositories::mongo::{
    MongoCoordinatorRepository, MongoDoctorRepository, MongoReviewRepository, MongoUserRepository,
};
use crate::services::auth::{JwtTokenService, PasswordService, TokenIssuer};
use crate::services::verification::StubVerificationProvider;

/// 선택된 저장소 구현 묶음
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub coordinators: Arc<dyn CoordinatorRepository>,
    pub doctors: Arc<dyn DoctorRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            coordinators: Arc::new(InMemoryCoordinatorRepository::new()),
            doctors: Arc::new(InMemoryDoctorRepository::new()),
            reviews: Arc::new(InMemoryReviewRepository::new()),
        }
    }

    /// MongoDB 저장소를 만들고 인덱스를 보장합니다.
    pub async fn mongo(db: &Database, redis: Option<RedisClient>) -> AppResult<Self> {
        let users = MongoUserRepository::new(db, redis);
        let coordinators = MongoCoordinatorRepository::new(db);
        let doctors = MongoDoctorRepository::new(db);
        let reviews = MongoReviewRepository::new(db);

        users.create_indexes().await?;
        coordinators.create_indexes().await?;
        doctors.create_indexes().await?;
        reviews.create_indexes().await?;
        log::info!("✅ MongoDB 인덱스 확인 완료 ({})", db.database_name());

        Ok(Self {
            users: Arc::new(users),
            coordinators: Arc::new(coordinators),
            doctors: Arc::new(doctors),
            reviews: Arc::new(reviews),
        })
    }
}

/// 핸들러와 미들웨어가 공유하는 조립 결과
#[derive(Clone)]
pub struct AppContainer {
    pub repositories: Repositories,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub register_user: RegisterUserUseCase,
    pub login_user: LoginUserUseCase,
    pub create_review: CreateReviewUseCase,
    pub get_reviews: GetReviewsUseCase,
    pub update_review: UpdateReviewUseCase,
    pub review_user_verification: ReviewUserVerificationUseCase,
    pub seed_admin: SeedAdminUseCase,
    pub search_coordinators: SearchCoordinatorsUseCase,
    pub search_doctors: SearchDoctorsUseCase,
}

impl AppContainer {
    pub fn new(
        repositories: Repositories,
        password_service: PasswordService,
        token_issuer: Arc<dyn TokenIssuer>,
        verification_policy: Arc<dyn VerificationPolicy>,
    ) -> Self {
        let access_service = ReviewAccessService::new(repositories.reviews.clone());

        Self {
            register_user: RegisterUserUseCase::new(
                repositories.users.clone(),
                password_service.clone(),
                verification_policy,
            ),
            login_user: LoginUserUseCase::new(
                repositories.users.clone(),
                password_service.clone(),
                token_issuer.clone(),
            ),
            seed_admin: SeedAdminUseCase::new(repositories.users.clone(), password_service),
            create_review: CreateReviewUseCase::new(
                repositories.reviews.clone(),
                repositories.coordinators.clone(),
                repositories.doctors.clone(),
                access_service.clone(),
            ),
            get_reviews: GetReviewsUseCase::new(repositories.reviews.clone(), access_service),
            update_review: UpdateReviewUseCase::new(repositories.reviews.clone()),
            review_user_verification: ReviewUserVerificationUseCase::new(
                repositories.users.clone(),
            ),
            search_coordinators: SearchCoordinatorsUseCase::new(
                repositories.coordinators.clone(),
            ),
            search_doctors: SearchDoctorsUseCase::new(repositories.doctors.clone()),
            token_issuer,
            repositories,
        }
    }

    /// 환경 변수 설정(`BCRYPT_COST`, `JWT_*`, `VERIFICATION_POLICY`)으로 조립합니다.
    pub fn from_config(repositories: Repositories) -> Self {
        Self::new(
            repositories,
            PasswordService::from_config(),
            Arc::new(JwtTokenService::from_config()),
            verification_policy(VerificationConfig::policy()),
        )
    }
}

pub fn verification_policy(kind: VerificationPolicyKind) -> Arc<dyn VerificationPolicy> {
    let policy: Arc<dyn VerificationPolicy> = match kind {
        VerificationPolicyKind::Auto => Arc::new(ProviderBackedPolicy::new(
            UserVerificationService::new(Arc::new(StubVerificationProvider)),
        )),
        VerificationPolicyKind::Manual => Arc::new(ManualReviewPolicy),
    };
    log::info!("가입 인증 정책: {}", policy.name());
    policy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_selection() {
        assert_eq!(verification_policy(VerificationPolicyKind::Manual).name(), "manual");
        assert_eq!(verification_policy(VerificationPolicyKind::Auto).name(), "auto");
    }
}
