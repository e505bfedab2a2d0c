//! 관리자 가입 인증 심사
use actix_web::{post, web, HttpResponse};

use crate::core::container::AppContainer;
use crate::core::errors::AppError;
use crate::domain::dto::VerificationDecision;
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::current_user;

async fn apply_decision(
    container: &AppContainer,
    principal: &AuthenticatedUser,
    user_id: &str,
    decision: VerificationDecision,
) -> Result<HttpResponse, AppError> {
    let reviewer = current_user(container, principal).await?;
    let user = container
        .review_user_verification
        .execute(user_id, decision, &reviewer)
        .await?;

    Ok(HttpResponse::Ok().json(user.to_snapshot()))
}

/// # Endpoint
/// `POST /api/v1/admin/users/{user_id}/verify`
#[post("/users/{user_id}/verify")]
pub async fn verify_user(
    container: web::Data<AppContainer>,
    principal: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    apply_decision(&container, &principal, &user_id, VerificationDecision::Approve).await
}

/// # Endpoint
/// `POST /api/v1/admin/users/{user_id}/reject`
#[post("/users/{user_id}/reject")]
pub async fn reject_user(
    container: web::Data<AppContainer>,
    principal: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    apply_decision(&container, &principal, &user_id, VerificationDecision::Reject).await
}
