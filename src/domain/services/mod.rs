//! 도메인 서비스
//!
//! 단일 엔티티에 속하지 않는 규칙을 담습니다.
//!
//! | 서비스 | 역할 |
//! |--------|------|
//! | [`UserVerificationService`] | 면허번호/사업자번호를 외부 인증 제공자에 확인 |
//! | [`ReviewAccessService`] | 리뷰 작성/열람 게이트 (인증 여부, 작성 후 열람) |
//! | [`VerificationPolicy`] | 가입 직후 자동 승인 여부를 정하는 전략 |

pub mod review_access_service;
pub mod user_verification_service;
pub mod verification_policy;

pub use review_access_service::ReviewAccessService;
pub use user_verification_service::{UserVerificationService, VerificationProvider};
pub use verification_policy::{ManualReviewPolicy, ProviderBackedPolicy, VerificationPolicy};
