use async_trait::async_trait;
use serde::Deserialize;

use super::Pagination;
use crate::core::errors::AppResult;
use crate::domain::entities::doctors::Doctor;
use crate::domain::value_objects::DoctorId;

/// 의사 검색 조건. `specialty`는 전문 분야 중 하나라도 부분 일치하면 통과합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorSearchCriteria {
    pub name: Option<String>,
    pub hospital_name: Option<String>,
    pub department: Option<String>,
    pub specialty: Option<String>,
}

#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn find_by_id(&self, id: &DoctorId) -> AppResult<Option<Doctor>>;

    async fn find_by_name_and_hospital(
        &self,
        name: &str,
        hospital_name: &str,
    ) -> AppResult<Option<Doctor>>;

    async fn search(
        &self,
        criteria: &DoctorSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Doctor>>;

    async fn save(&self, doctor: &Doctor) -> AppResult<()>;

    async fn update(&self, doctor: &Doctor) -> AppResult<()>;

    /// 없는 ID면 `NotFound`.
    async fn delete(&self, id: &DoctorId) -> AppResult<()>;
}
