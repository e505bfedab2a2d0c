//! 사용자 응답 DTO
//!
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다. 사용자 정보는 항상
//! [`UserSnapshot`](crate::domain::entities::users::UserSnapshot)으로 나갑니다.

pub mod auth_response;

pub use auth_response::{LoginResponse, RegisterResponse};
