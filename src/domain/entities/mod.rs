//! # Domain Entities Module
//!
//! 식별자를 가지며 스스로의 불변식을 지키는 도메인 엔티티들입니다.
//!
//! ```text
//! entities/
//! ├── users/          ← 가입 사용자 (병원 직원 / 관리자)
//! ├── coordinators/   ← 리뷰 대상: 코디네이터
//! ├── doctors/        ← 리뷰 대상: 의사
//! └── reviews/        ← 다섯 항목 평점 리뷰
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! - **검증 생성자**: 모든 엔티티는 `create(props)`로만 만들어지며, 불변식을 어기면
//!   [`DomainError`](crate::domain::errors::DomainError)를 돌려주고 객체를 만들지 않습니다.
//! - **명명된 변경**: 필드는 비공개이며 `verify`, `update_profile`, `update` 같은
//!   도메인 연산으로만 바뀝니다. 각 연산은 `updated_at`을 갱신합니다.
//! - **ID 참조**: 엔티티는 다른 엔티티를 직접 들고 있지 않고 식별자만 가집니다.
//! - **스냅샷**: `to_snapshot()`은 직렬화 가능한 공개 뷰를 만듭니다.
//!   비밀번호 해시나 익명 작성자 ID처럼 민감한 값은 여기서 가려집니다.
//!
//! 영속성 매핑(MongoDB 문서 구조)은 엔티티가 아닌 저장소 구현 쪽에 있습니다.

pub mod coordinators;
pub mod doctors;
pub mod reviews;
pub mod users;

pub use coordinators::Coordinator;
pub use doctors::Doctor;
pub use reviews::{Review, ReviewRatings, ReviewTarget, TargetType};
pub use users::{User, UserRole, VerificationStatus};
