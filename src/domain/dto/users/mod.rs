//! 사용자 인증 관련 DTO

pub mod request;
pub mod response;

pub use request::{LoginRequest, RegisterUserRequest};
pub use response::{LoginResponse, RegisterResponse};
