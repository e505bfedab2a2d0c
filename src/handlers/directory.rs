//! 코디네이터/의사 디렉터리 검색 (인증 불필요)
use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::core::container::AppContainer;
use crate::core::errors::AppError;
use crate::domain::dto::{CoordinatorSearchQuery, DirectoryListResponse, DoctorSearchQuery};
use crate::domain::entities::coordinators::Coordinator;
use crate::domain::entities::doctors::Doctor;

/// # Endpoint
/// `GET /api/v1/coordinators?name=김&hospitalName=서울`
#[get("")]
pub async fn search_coordinators(
    container: web::Data<AppContainer>,
    query: web::Query<CoordinatorSearchQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let coordinators = container.search_coordinators.execute(&query).await?;
    let items = coordinators.iter().map(Coordinator::to_snapshot).collect();

    Ok(HttpResponse::Ok().json(DirectoryListResponse::new(items, query.pagination())))
}

/// # Endpoint
/// `GET /api/v1/doctors?specialty=정형외과`
#[get("")]
pub async fn search_doctors(
    container: web::Data<AppContainer>,
    query: web::Query<DoctorSearchQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let doctors = container.search_doctors.execute(&query).await?;
    let items = doctors.iter().map(Doctor::to_snapshot).collect();

    Ok(HttpResponse::Ok().json(DirectoryListResponse::new(items, query.pagination())))
}
