//! # Domain Models Module
//!
//! 엔티티는 아니지만 여러 계층이 공유하는 모델입니다.
//!
//! - [`auth`]: 인증 미들웨어가 요청 확장(extensions)에 넣는 `AuthenticatedUser`와 인증 모드
//! - [`token`]: JWT 클레임

pub mod auth;
pub mod token;
