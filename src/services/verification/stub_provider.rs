use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::services::VerificationProvider;
use crate::domain::value_objects::{BusinessNumber, MedicalLicenseNumber};

/// 형식만 통과하면 항상 유효하다고 답하는 제공자
///
/// 외부 기관 조회를 하지 않으므로 실제 진위 확인 근거가 되지 않습니다.
/// `VERIFICATION_POLICY=auto`와 함께 쓰면 형식이 맞는 모든 가입이 자동 승인됩니다.
#[derive(Debug, Default, Clone)]
pub struct StubVerificationProvider;

#[async_trait]
impl VerificationProvider for StubVerificationProvider {
    async fn verify_medical_license(&self, license: &MedicalLicenseNumber) -> AppResult<bool> {
        log::warn!(
            "Stub provider accepted medical license {} without registry lookup",
            license.value()
        );
        Ok(true)
    }

    async fn verify_business_number(&self, number: &BusinessNumber) -> AppResult<bool> {
        log::warn!(
            "Stub provider accepted business number {} without registry lookup",
            number.formatted()
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_stub_accepts_well_formed_numbers() {
        let provider = StubVerificationProvider;

        let license = MedicalLicenseNumber::create("123456").unwrap();
        assert!(provider.verify_medical_license(&license).await.unwrap());

        let number = BusinessNumber::create("2208162517").unwrap();
        assert!(provider.verify_business_number(&number).await.unwrap());
    }
}
