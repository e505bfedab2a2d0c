use async_trait::async_trait;
use serde::Deserialize;

use super::Pagination;
use crate::core::errors::AppResult;
use crate::domain::entities::coordinators::Coordinator;
use crate::domain::value_objects::CoordinatorId;

/// 코디네이터 검색 조건. 각 필드는 부분 일치(대소문자 무시)이며 비어 있으면 무시합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinatorSearchCriteria {
    pub name: Option<String>,
    pub hospital_name: Option<String>,
    pub department: Option<String>,
}

#[async_trait]
pub trait CoordinatorRepository: Send + Sync {
    async fn find_by_id(&self, id: &CoordinatorId) -> AppResult<Option<Coordinator>>;

    async fn find_by_name_and_hospital(
        &self,
        name: &str,
        hospital_name: &str,
    ) -> AppResult<Option<Coordinator>>;

    /// 이름순 정렬된 검색 결과 한 페이지
    async fn search(
        &self,
        criteria: &CoordinatorSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Coordinator>>;

    async fn save(&self, coordinator: &Coordinator) -> AppResult<()>;

    async fn update(&self, coordinator: &Coordinator) -> AppResult<()>;

    /// 없는 ID면 `NotFound`.
    async fn delete(&self, id: &CoordinatorId) -> AppResult<()>;
}
