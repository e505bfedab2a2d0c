//! 관리자 계정 준비
//!
//! 수동 심사 정책에서는 승인된 관리자가 있어야 가입자를 승인할 수 있습니다.
//! 시작 시 `ADMIN_EMAIL`/`ADMIN_PASSWORD`로 `VERIFIED` 상태의 `ADMIN`을 한 번 만들고,
//! 같은 이메일이 이미 있으면 건드리지 않습니다.

use std::sync::Arc;

use crate::config::AdminSeed;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{User, UserProps, UserRole, VerificationStatus};
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::Email;
use crate::services::auth::PasswordService;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone)]
pub struct SeedAdminUseCase {
    user_repo: Arc<dyn UserRepository>,
    password_service: PasswordService,
}

impl SeedAdminUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, password_service: PasswordService) -> Self {
        Self {
            user_repo,
            password_service,
        }
    }

    /// 새로 만든 관리자를 돌려주고, 이미 있으면 `None`.
    pub async fn execute(&self, seed: &AdminSeed) -> AppResult<Option<User>> {
        let email = Email::create(&seed.email)?;

        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
            if existing.is_admin() {
                log::info!("Admin account already present: {}", existing.id());
            } else {
                log::warn!(
                    "Admin seed skipped, email belongs to non-admin user {}",
                    existing.id()
                );
            }
            return Ok(None);
        }

        if seed.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::InvalidRequest(format!(
                "ADMIN_PASSWORD must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let mut props = UserProps::new_staff(
            email,
            self.password_service.hash(&seed.password)?,
            seed.name.as_str(),
            seed.hospital_name.as_str(),
        );
        props.role = UserRole::Admin;
        props.verification_status = VerificationStatus::Verified;

        let admin = User::create(props)?;
        self.user_repo.save(&admin).await?;
        log::info!("Admin account created: {}", admin.id());

        Ok(Some(admin))
    }
}
