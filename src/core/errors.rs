//! # Application Error Handling System
//!
//! 리뷰 서비스 전역에서 쓰는 통합 에러 타입입니다.
//! 도메인 검증 실패([`DomainError`])부터 저장소 I/O 실패까지 모든 실패를
//! 하나의 `AppError`로 모으고, Actix-Web의 `ResponseError`를 구현하여
//! 핸들러에서 `?`만으로 일관된 HTTP 응답이 나가도록 합니다.
//!
//! ## 에러 분류
//!
//! ### 1. 입력 검증
//! - `Validation`: 값 객체/엔티티 불변식 위반. 어떤 규칙이 깨졌는지
//!   `DomainError` 변형이 그대로 보존됩니다.
//! - `InvalidVerificationInput`: 가입 인증 종류와 번호 조합이 맞지 않음
//! - `InvalidRequest`: 요청 DTO의 `validator` 검증 실패
//!
//! ### 2. 유일성 위반
//! - `DuplicateEmail` / `DuplicateLicense` / `DuplicateBusinessNumber` / `DuplicateReview`
//!
//! ### 3. 인증/인가
//! - `InvalidCredentials`: 로그인 실패. 계정이 없는 경우와 비밀번호가 틀린 경우를
//!   구분하지 않습니다.
//! - `AuthenticationError`: 토큰 누락/만료/위조
//! - `NotVerified`, `AccessDenied`: 리뷰 작성/열람 게이트 실패
//!
//! ### 4. 조회 실패
//! - `TargetNotFound`: 리뷰 대상(코디네이터/의사)이 없음
//! - `NotFound`: 그 밖의 리소스가 없음
//!
//! ### 5. 인프라
//! - `PersistenceError`, `CacheError`, `InternalError`
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `Validation`, `InvalidVerificationInput`, `InvalidRequest` | 400 Bad Request |
//! | `InvalidCredentials`, `AuthenticationError` | 401 Unauthorized |
//! | `NotVerified`, `AccessDenied` | 403 Forbidden |
//! | `TargetNotFound`, `NotFound` | 404 Not Found |
//! | `Duplicate*` | 409 Conflict |
//! | `PersistenceError`, `CacheError`, `InternalError` | 500 Internal Server Error |
//!
//! 응답 본문은 `{"error": "<메시지>", "code": "<기계용 코드>"}` 형식입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_target(&self, id: &CoordinatorId) -> AppResult<Coordinator> {
//!     self.coordinator_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::TargetNotFound(format!("coordinator {}", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 값 객체/엔티티 검증 실패
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Medical license number is already registered")]
    DuplicateLicense,

    #[error("Business number is already registered")]
    DuplicateBusinessNumber,

    /// 같은 작성자가 같은 대상에 이미 리뷰를 남김
    #[error("Review for this target already exists")]
    DuplicateReview,

    /// 인증 종류/번호 조합 오류 (번호 누락, 알 수 없는 종류 등)
    #[error("Invalid verification input: {0}")]
    InvalidVerificationInput(String),

    /// 요청 본문/쿼리 형식 검증 실패
    ///
    /// ```rust,ignore
    /// payload.validate()
    ///     .map_err(|e| AppError::InvalidRequest(e.to_string()))?;
    /// ```
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 로그인 실패
    ///
    /// 계정 존재 여부가 드러나지 않도록 메시지는 항상 같습니다.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 인증(승인)되지 않은 사용자의 리뷰 작성 시도
    #[error("User is not verified")]
    NotVerified,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Review target not found: {0}")]
    TargetNotFound(String),

    /// 저장소 I/O 실패
    ///
    /// MongoDB 드라이버 에러 등은 메시지로만 전달됩니다.
    ///
    /// ```rust,ignore
    /// collection.insert_one(doc).await
    ///     .map_err(|e| AppError::PersistenceError(e.to_string()))?;
    /// ```
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 토큰 누락/만료/서명 불일치
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 분기할 때 쓰는 고정 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::DuplicateLicense => "DUPLICATE_LICENSE",
            AppError::DuplicateBusinessNumber => "DUPLICATE_BUSINESS_NUMBER",
            AppError::DuplicateReview => "DUPLICATE_REVIEW",
            AppError::InvalidVerificationInput(_) => "INVALID_VERIFICATION_INPUT",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotVerified => "NOT_VERIFIED",
            AppError::AccessDenied(_) => "ACCESS_DENIED",
            AppError::TargetNotFound(_) => "TARGET_NOT_FOUND",
            AppError::PersistenceError(_) => "PERSISTENCE_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AuthenticationError(_) => "AUTHENTICATION_ERROR",
            AppError::CacheError(_) => "CACHE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::InvalidVerificationInput(_)
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::AuthenticationError(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotVerified | AppError::AccessDenied(_) => StatusCode::FORBIDDEN,
            AppError::TargetNotFound(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail
            | AppError::DuplicateLicense
            | AppError::DuplicateBusinessNumber
            | AppError::DuplicateReview => StatusCode::CONFLICT,
            AppError::PersistenceError(_)
            | AppError::CacheError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 5xx 에러는 내부 메시지를 로그에만 남기고 클라이언트에는 일반 문구를 보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": message,
            "code": self.code()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let client = redis::Client::open(url).context("Failed to open redis client")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    #[test]
    fn test_domain_error_converts_to_validation() {
        let error: AppError = DomainError::InvalidFormat { field: "email" }.into();

        assert!(matches!(
            error,
            AppError::Validation(DomainError::InvalidFormat { field: "email" })
        ));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::DuplicateReview.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotVerified.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::AccessDenied("write a review first".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::TargetNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::PersistenceError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_error_body_hides_details() {
        let response = AppError::PersistenceError("connection refused 10.0.0.3".into()).error_response();
        let body = response.into_body().try_into_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["code"], "PERSISTENCE_ERROR");
    }

    #[test]
    fn test_client_error_body_carries_message() {
        let response = AppError::DuplicateEmail.error_response();
        let body = response.into_body().try_into_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Email is already registered");
        assert_eq!(json["code"], "DUPLICATE_EMAIL");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
