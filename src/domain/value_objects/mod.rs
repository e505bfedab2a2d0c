//! 값 객체
//!
//! 모든 값 객체는 검증 팩토리(`create`/`from_string`)로만 생성되며, 생성 이후에는 불변입니다.
//! 검증에 실패하면 [`DomainError`](crate::domain::errors::DomainError)의 구체적인 변형을 돌려줍니다.

pub mod business_number;
pub mod email;
pub mod ids;
pub mod medical_license_number;
pub mod phone_number;
pub mod rating;
pub mod verification_credential;

pub use business_number::BusinessNumber;
pub use email::Email;
pub use ids::{CoordinatorId, DoctorId, ReviewId, UserId};
pub use medical_license_number::MedicalLicenseNumber;
pub use phone_number::PhoneNumber;
pub use rating::Rating;
pub use verification_credential::VerificationCredential;
