//! 리뷰 HTTP 핸들러
//!
//! 작성은 인증된(`VERIFIED`) 사용자만, 열람은 리뷰를 한 건 이상 쓴 사용자만 가능합니다.
use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::container::AppContainer;
use crate::core::errors::AppError;
use crate::domain::dto::{CreateReviewRequest, GetReviewsQuery, ReviewListResponse, UpdateReviewRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::current_user;

/// # Endpoint
/// `POST /api/v1/reviews`
#[post("")]
pub async fn create_review(
    container: web::Data<AppContainer>,
    principal: AuthenticatedUser,
    payload: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let author = current_user(&container, &principal).await?;
    let review = container
        .create_review
        .execute(payload.into_inner(), &author)
        .await?;

    Ok(HttpResponse::Created().json(review.to_snapshot()))
}

/// # Endpoint
/// `GET /api/v1/reviews?targetType=coordinator&targetId=...&minRating=3&limit=20`
#[get("")]
pub async fn list_reviews(
    container: web::Data<AppContainer>,
    principal: AuthenticatedUser,
    query: web::Query<GetReviewsQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let viewer = current_user(&container, &principal).await?;
    let reviews = container.get_reviews.execute(&query, &viewer).await?;

    Ok(HttpResponse::Ok().json(ReviewListResponse::new(&reviews, query.pagination())))
}

/// 작성자 본인만 제목/본문/평점을 고칠 수 있습니다.
///
/// # Endpoint
/// `PUT /api/v1/reviews/{review_id}`
#[put("/{review_id}")]
pub async fn update_review(
    container: web::Data<AppContainer>,
    principal: AuthenticatedUser,
    review_id: web::Path<String>,
    payload: web::Json<UpdateReviewRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let author = current_user(&container, &principal).await?;
    let review = container
        .update_review
        .execute(&review_id, payload.into_inner(), &author)
        .await?;

    Ok(HttpResponse::Ok().json(review.to_snapshot()))
}
