//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체입니다. 요청 DTO는 `validator` derive로
//! 형식 규칙(이메일 모양, 비밀번호 길이, 필수 문자열)을 선언하고, 핸들러가
//! `validate()`를 호출한 뒤 유스케이스에 그대로 넘깁니다. 도메인 불변식(평점 범위,
//! 사업자번호 검증번호 등)은 DTO가 아니라 값 객체가 검사합니다.
//!
//! JSON 필드 이름은 camelCase 입니다.
//!
//! ```text
//! dto/
//! ├── users/        가입/로그인 요청, 인증 응답
//! ├── reviews/      리뷰 작성/수정 요청, 목록 쿼리, 목록 응답
//! ├── directory/    코디네이터/의사 검색 쿼리
//! └── admin/        가입 인증 심사 결정
//! ```

pub mod admin;
pub mod directory;
pub mod reviews;
pub mod users;

pub use admin::VerificationDecision;
pub use directory::{CoordinatorSearchQuery, DirectoryListResponse, DoctorSearchQuery};
pub use reviews::{
    CreateReviewRequest, GetReviewsQuery, RatingsInput, ReviewListResponse, UpdateReviewRequest,
};
pub use users::{LoginRequest, LoginResponse, RegisterResponse, RegisterUserRequest};
