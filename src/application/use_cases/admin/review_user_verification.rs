//! 가입 인증 심사
//!
//! `PENDING` 사용자를 관리자가 승인(`verify`)하거나 거절(`reject`)합니다.
//! `VERIFIED`/`REJECTED`는 종결 상태라서 이미 심사된 사용자에 대한 결정은 `Validation` 에러로 돌아옵니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::VerificationDecision;
use crate::domain::entities::users::User;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::UserId;

#[derive(Clone)]
pub struct ReviewUserVerificationUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl ReviewUserVerificationUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        target_user_id: &str,
        decision: VerificationDecision,
        reviewer: &User,
    ) -> AppResult<User> {
        if !reviewer.is_admin() || !reviewer.is_verified() {
            log::warn!("Non-admin user {} tried to review verification", reviewer.id());
            return Err(AppError::AccessDenied("admin role required".to_string()));
        }

        let id = UserId::from_string(target_user_id)?;
        let mut user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;

        match decision {
            VerificationDecision::Approve => user.verify()?,
            VerificationDecision::Reject => user.reject()?,
        }

        self.user_repo.update(&user).await?;
        log::info!(
            "Admin {} applied {} to user {} ({})",
            reviewer.id(),
            decision.as_str(),
            user.id(),
            user.verification_status()
        );

        Ok(user)
    }
}
