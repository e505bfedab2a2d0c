//! 관리자 유스케이스

pub mod review_user_verification;
pub mod seed_admin;

pub use review_user_verification::ReviewUserVerificationUseCase;
pub use seed_admin::SeedAdminUseCase;
