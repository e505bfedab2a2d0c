//! 가입 시 자동 승인 전략
//!
//! 가입 직후 사용자를 바로 `VERIFIED`로 바꿀지 여부를 결정합니다.
//!
//! - [`ProviderBackedPolicy`]: 인증 제공자가 확인하면 자동 승인
//! - [`ManualReviewPolicy`]: 항상 `PENDING`으로 두고 관리자 심사를 기다림
//!
//! 어느 전략을 쓸지는 `VERIFICATION_POLICY` 설정으로 고릅니다.

use async_trait::async_trait;

use super::UserVerificationService;
use crate::domain::value_objects::VerificationCredential;

#[async_trait]
pub trait VerificationPolicy: Send + Sync {
    async fn should_auto_verify(&self, credential: &VerificationCredential) -> bool;

    fn name(&self) -> &'static str;
}

pub struct ProviderBackedPolicy {
    verification_service: UserVerificationService,
}

impl ProviderBackedPolicy {
    pub fn new(verification_service: UserVerificationService) -> Self {
        Self {
            verification_service,
        }
    }
}

#[async_trait]
impl VerificationPolicy for ProviderBackedPolicy {
    async fn should_auto_verify(&self, credential: &VerificationCredential) -> bool {
        self.verification_service.verify_credential(credential).await
    }

    fn name(&self) -> &'static str {
        "auto"
    }
}

#[derive(Debug, Default)]
pub struct ManualReviewPolicy;

#[async_trait]
impl VerificationPolicy for ManualReviewPolicy {
    async fn should_auto_verify(&self, _credential: &VerificationCredential) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}
