//! 이메일/비밀번호 로그인
//!
//! 계정이 없는 경우와 비밀번호가 틀린 경우 모두 `InvalidCredentials` 하나로 응답합니다.
//! 계정이 없어도 더미 해시로 bcrypt 검증을 한 번 수행하므로 응답 시간도 비슷합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::LoginRequest;
use crate::domain::entities::users::User;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::Email;
use crate::services::auth::{PasswordService, TokenIssuer};

/// 로그인 결과
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
    pub expires_in: i64,
}

#[derive(Clone)]
pub struct LoginUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    password_service: PasswordService,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_service: PasswordService,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            user_repo,
            password_service,
            token_issuer,
        }
    }

    pub async fn execute(&self, request: LoginRequest) -> AppResult<LoginResult> {
        let email = Email::create(&request.email)?;

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            self.password_service.verify_against_dummy(&request.password);
            log::warn!("Login failed: unknown account");
            return Err(AppError::InvalidCredentials);
        };

        if !self
            .password_service
            .verify(&request.password, user.password_hash())
        {
            log::warn!("Login failed: wrong password for user {}", user.id());
            return Err(AppError::InvalidCredentials);
        }

        let token = self.token_issuer.generate_token(user.id())?;
        log::info!("User logged in: {}", user.id());

        Ok(LoginResult {
            user,
            token,
            expires_in: self.token_issuer.expiration_seconds(),
        })
    }
}
