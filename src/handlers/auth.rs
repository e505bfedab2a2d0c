//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 가입과 로그인을 처리합니다. 로그인 성공 시 토큰을 본문과
//! HTTP-only `auth-token` 쿠키로 함께 내려줍니다.
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::config::AuthCookieConfig;
use crate::core::container::AppContainer;
use crate::core::errors::AppError;
use crate::domain::dto::{LoginRequest, LoginResponse, RegisterResponse, RegisterUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::current_user;

/// 회원가입
///
/// # Endpoint
/// `POST /api/v1/auth/register`
///
/// 인증 정책이 `manual`이면 `PENDING` 상태로 생성되며, 관리자 승인 후 리뷰를 쓸 수 있습니다.
#[post("/register")]
pub async fn register(
    container: web::Data<AppContainer>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let user = container.register_user.execute(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(RegisterResponse::from_user(&user)))
}

/// 로컬 로그인
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    container: web::Data<AppContainer>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let result = container.login_user.execute(payload.into_inner()).await?;

    let cookie = Cookie::build(AuthCookieConfig::NAME, result.token.clone())
        .path("/")
        .http_only(true)
        .secure(AuthCookieConfig::secure())
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(result.expires_in))
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        user: result.user.to_snapshot(),
        token: result.token,
        token_type: "Bearer".to_string(),
        expires_in: result.expires_in,
    }))
}

/// 인증 쿠키 삭제
///
/// 토큰은 상태 없이 검증되므로 서버 쪽에서 무효화하지 않습니다.
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(AuthCookieConfig::NAME, "")
        .path("/")
        .http_only(true)
        .secure(AuthCookieConfig::secure())
        .finish();
    cookie.make_removal();

    HttpResponse::NoContent().cookie(cookie).finish()
}

/// 현재 로그인한 사용자 정보
///
/// # Endpoint
/// `GET /api/v1/me`
#[get("")]
pub async fn me(
    container: web::Data<AppContainer>,
    principal: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&container, &principal).await?;
    Ok(HttpResponse::Ok().json(user.to_snapshot()))
}
