//! # HTTP Request Handlers Module
//!
//! 요청 DTO를 검증하고 [`AppContainer`]의 유스케이스를 호출한 뒤 결과를 JSON으로
//! 돌려줍니다. 비즈니스 규칙은 유스케이스에 있고, 핸들러는 HTTP 변환만 담당합니다.
//!
//! | 모듈 | 엔드포인트 |
//! |------|-----------|
//! | [`auth`] | `POST /auth/register`, `POST /auth/login`, `POST /auth/logout`, `GET /me` |
//! | [`reviews`] | `POST /reviews`, `GET /reviews`, `PUT /reviews/{id}` |
//! | [`directory`] | `GET /coordinators`, `GET /doctors` |
//! | [`admin`] | `POST /admin/users/{id}/verify`, `POST /admin/users/{id}/reject` |
//!
//! 모든 경로는 `/api/v1` 아래에 등록됩니다.

pub mod admin;
pub mod auth;
pub mod directory;
pub mod reviews;

use crate::core::container::AppContainer;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::models::auth::AuthenticatedUser;

/// 토큰의 사용자 ID로 현재 사용자를 다시 읽습니다.
///
/// 토큰 발급 후 계정이 삭제되었다면 401로 처리합니다.
pub(crate) async fn current_user(
    container: &AppContainer,
    principal: &AuthenticatedUser,
) -> AppResult<User> {
    container
        .repositories
        .users
        .find_by_id(&principal.user_id)
        .await?
        .ok_or_else(|| {
            log::warn!("토큰 사용자 {}를 찾을 수 없습니다", principal.user_id);
            AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string())
        })
}
