//! # 사용자 요청 DTO
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며, 핸들러에서
//! `AppError::InvalidRequest`로 바꿔 400 응답을 돌려줍니다.

pub mod login_request;
pub mod register_request;

pub use login_request::LoginRequest;
pub use register_request::RegisterUserRequest;
