//! 가입 인증 서비스
//!
//! 외부 인증 제공자(면허 조회, 사업자 상태 조회 등)를 감싸는 얇은 서비스입니다.
//! 원시 문자열을 받아 값 객체로 검증한 뒤 제공자에 위임하며, 형식 오류나
//! 제공자 오류는 전파하지 않고 `false`로 돌려줍니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::value_objects::{BusinessNumber, MedicalLicenseNumber, VerificationCredential};

/// 외부 인증 제공자
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    async fn verify_medical_license(&self, license: &MedicalLicenseNumber) -> AppResult<bool>;

    async fn verify_business_number(&self, number: &BusinessNumber) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct UserVerificationService {
    provider: Arc<dyn VerificationProvider>,
}

impl UserVerificationService {
    pub fn new(provider: Arc<dyn VerificationProvider>) -> Self {
        Self { provider }
    }

    pub async fn verify_medical_license(&self, license_number: &str) -> bool {
        match MedicalLicenseNumber::create(license_number) {
            Ok(license) => {
                self.verify_credential(&VerificationCredential::MedicalLicense(license))
                    .await
            }
            Err(e) => {
                log::debug!("Medical license rejected before provider lookup: {}", e);
                false
            }
        }
    }

    pub async fn verify_business_number(&self, business_number: &str) -> bool {
        match BusinessNumber::create(business_number) {
            Ok(number) => {
                self.verify_credential(&VerificationCredential::BusinessNumber(number))
                    .await
            }
            Err(e) => {
                log::debug!("Business number rejected before provider lookup: {}", e);
                false
            }
        }
    }

    /// 이미 검증된 인증 수단을 제공자에 확인합니다.
    pub async fn verify_credential(&self, credential: &VerificationCredential) -> bool {
        let result = match credential {
            VerificationCredential::MedicalLicense(license) => {
                self.provider.verify_medical_license(license).await
            }
            VerificationCredential::BusinessNumber(number) => {
                self.provider.verify_business_number(number).await
            }
        };

        result.unwrap_or_else(|e| {
            log::warn!(
                "Verification provider failed for {} credential: {}",
                credential.kind(),
                e
            );
            false
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::core::errors::AppError;

    /// 정해진 답을 돌려주며 호출 횟수를 세는 제공자
    pub(crate) struct FixedProvider {
        pub answer: AppResult<bool>,
        pub calls: AtomicUsize,
    }

    impl FixedProvider {
        pub(crate) fn new(answer: bool) -> Self {
            Self {
                answer: Ok(answer),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                answer: Err(AppError::InternalError("registry offline".to_string())),
                calls: AtomicUsize::new(0),
            }
        }

        fn respond(&self) -> AppResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.answer {
                Ok(answer) => Ok(*answer),
                Err(e) => Err(AppError::InternalError(e.to_string())),
            }
        }
    }

    #[async_trait]
    impl VerificationProvider for FixedProvider {
        async fn verify_medical_license(&self, _: &MedicalLicenseNumber) -> AppResult<bool> {
            self.respond()
        }

        async fn verify_business_number(&self, _: &BusinessNumber) -> AppResult<bool> {
            self.respond()
        }
    }

    #[actix_web::test]
    async fn test_valid_numbers_delegate_to_provider() {
        let provider = Arc::new(FixedProvider::new(true));
        let service = UserVerificationService::new(provider.clone());

        assert!(service.verify_medical_license("12345").await);
        assert!(service.verify_business_number("123-45-67891").await);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_malformed_numbers_return_false_without_lookup() {
        let provider = Arc::new(FixedProvider::new(true));
        let service = UserVerificationService::new(provider.clone());

        assert!(!service.verify_medical_license("12").await);
        assert!(!service.verify_business_number("1234567890").await);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_provider_failure_is_false() {
        let service = UserVerificationService::new(Arc::new(FixedProvider::failing()));
        assert!(!service.verify_medical_license("123456").await);
    }

    #[actix_web::test]
    async fn test_provider_negative_answer() {
        let service = UserVerificationService::new(Arc::new(FixedProvider::new(false)));
        assert!(!service.verify_business_number("2208162517").await);
    }
}
