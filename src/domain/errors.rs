//! 도메인 검증 에러
//!
//! 값 객체와 엔티티가 스스로의 불변식을 검사하다 실패했을 때 돌려주는 에러입니다.
//! 어떤 규칙이 깨졌는지 변형(variant)으로 구분되며, 애플리케이션 계층에서는
//! [`AppError::Validation`](crate::core::errors::AppError::Validation)으로 감싸져
//! 종류 정보가 그대로 전달됩니다.

use thiserror::Error;

/// 값 객체/엔티티 검증 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 필수 값이 비어 있음
    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },

    /// 형식(정규식) 불일치
    #[error("invalid {field} format")]
    InvalidFormat { field: &'static str },

    /// 사업자등록번호 검증번호 불일치
    #[error("invalid {field} checksum")]
    InvalidChecksum { field: &'static str },

    /// 허용 범위를 벗어난 수치
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// 정수가 아닌 수치
    #[error("{field} must be an integer")]
    NotInteger { field: &'static str },

    /// 최소 길이 미달
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// 허용되지 않는 상태 전이 (예: 이미 인증된 사용자를 다시 인증)
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// 도메인 계층 Result 별칭
pub type DomainResult<T> = Result<T, DomainError>;
