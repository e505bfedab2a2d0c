//! 인프라 서비스 계층
//!
//! 도메인 트레이트의 구체 구현을 제공합니다.
//!
//! - [`auth`]: JWT 토큰 발급/검증(`TokenIssuer`), bcrypt 비밀번호 해싱
//! - [`verification`]: 면허번호/사업자번호 인증 제공자(`VerificationProvider`)

pub mod auth;
pub mod verification;
