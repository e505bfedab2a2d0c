//! 인증 관련 서비스: 토큰 발급/검증, 비밀번호 해싱

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::{extract_bearer_token, JwtTokenService, TokenIssuer};
