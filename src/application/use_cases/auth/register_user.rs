//! 병원 직원 회원가입
//!
//! 1. 이메일 정규화 후 중복 확인 (`DuplicateEmail`)
//! 2. 인증 종류별 번호 검증 및 중복 확인 (`DuplicateLicense` / `DuplicateBusinessNumber`),
//!    종류와 번호가 맞지 않으면 `InvalidVerificationInput`
//! 3. 비밀번호 bcrypt 해싱
//! 4. `PENDING` 상태 사용자 생성
//! 5. 인증 정책이 허용하면 저장 전에 `verify()`
//! 6. 저장
//!
//! 유스케이스 안의 중복 확인은 빠른 거절용입니다. 동시 가입 경쟁은 저장소의
//! 유일 인덱스가 막고, 같은 `Duplicate*` 에러로 돌아옵니다.

use std::sync::Arc;
use std::time::Instant;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::RegisterUserRequest;
use crate::domain::entities::users::{User, UserProps};
use crate::domain::repositories::UserRepository;
use crate::domain::services::VerificationPolicy;
use crate::domain::value_objects::{
    BusinessNumber, Email, MedicalLicenseNumber, VerificationCredential,
};
use crate::services::auth::PasswordService;

pub const VERIFICATION_TYPE_MEDICAL: &str = "medical";
pub const VERIFICATION_TYPE_BUSINESS: &str = "business";

#[derive(Clone)]
pub struct RegisterUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    password_service: PasswordService,
    verification_policy: Arc<dyn VerificationPolicy>,
}

impl RegisterUserUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_service: PasswordService,
        verification_policy: Arc<dyn VerificationPolicy>,
    ) -> Self {
        Self {
            user_repo,
            password_service,
            verification_policy,
        }
    }

    pub async fn execute(&self, request: RegisterUserRequest) -> AppResult<User> {
        let start_time = Instant::now();

        let email = Email::create(&request.email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::warn!("Registration refused, email already registered");
            return Err(AppError::DuplicateEmail);
        }

        let credential = self.resolve_credential(&request).await?;

        let hash_start = Instant::now();
        let password_hash = self.password_service.hash(&request.password)?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let mut props = UserProps::new_staff(
            email,
            password_hash,
            request.name,
            request.hospital_name,
        );
        props.credential = Some(credential.clone());
        props.verification_documents = request.verification_documents;

        let mut user = User::create(props)?;

        if self.verification_policy.should_auto_verify(&credential).await {
            user.verify()?;
            log::info!(
                "User {} auto-verified by {} policy ({})",
                user.id(),
                self.verification_policy.name(),
                credential.kind()
            );
        }

        self.user_repo.save(&user).await?;

        log::info!(
            "User registered: {} (status {})",
            user.id(),
            user.verification_status()
        );
        log::debug!("Total registration took: {:?}", start_time.elapsed());

        Ok(user)
    }

    /// 인증 종류에 맞는 번호를 값 객체로 만들고 중복을 확인합니다.
    async fn resolve_credential(
        &self,
        request: &RegisterUserRequest,
    ) -> AppResult<VerificationCredential> {
        match request.verification_type.as_str() {
            VERIFICATION_TYPE_MEDICAL => {
                let raw = required_number(
                    request.medical_license_number.as_deref(),
                    "medical license number is required for medical verification",
                )?;
                let license = MedicalLicenseNumber::create(raw)?;

                if self
                    .user_repo
                    .find_by_medical_license_number(&license)
                    .await?
                    .is_some()
                {
                    log::warn!("Registration refused, medical license already registered");
                    return Err(AppError::DuplicateLicense);
                }

                Ok(VerificationCredential::MedicalLicense(license))
            }
            VERIFICATION_TYPE_BUSINESS => {
                let raw = required_number(
                    request.business_number.as_deref(),
                    "business number is required for business verification",
                )?;
                let number = BusinessNumber::create(raw)?;

                if self.user_repo.find_by_business_number(&number).await?.is_some() {
                    log::warn!("Registration refused, business number already registered");
                    return Err(AppError::DuplicateBusinessNumber);
                }

                Ok(VerificationCredential::BusinessNumber(number))
            }
            other => Err(AppError::InvalidVerificationInput(format!(
                "unknown verification type: {}",
                other
            ))),
        }
    }
}

fn required_number<'a>(value: Option<&'a str>, message: &str) -> AppResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidVerificationInput(message.to_string()))
}
