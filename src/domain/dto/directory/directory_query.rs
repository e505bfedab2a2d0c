use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::repositories::{CoordinatorSearchCriteria, DoctorSearchCriteria, Pagination};

/// `GET /api/v1/coordinators` 쿼리
///
/// 모든 문자열 조건은 대소문자 무시 부분 일치입니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorSearchQuery {
    #[validate(length(max = 50, message = "검색어가 너무 깁니다"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "검색어가 너무 깁니다"))]
    pub hospital_name: Option<String>,

    pub department: Option<String>,

    pub limit: Option<u32>,

    pub offset: Option<u32>,
}

impl CoordinatorSearchQuery {
    pub fn criteria(&self) -> CoordinatorSearchCriteria {
        CoordinatorSearchCriteria {
            name: non_blank(&self.name),
            hospital_name: non_blank(&self.hospital_name),
            department: non_blank(&self.department),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}

/// `GET /api/v1/doctors` 쿼리
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSearchQuery {
    #[validate(length(max = 50, message = "검색어가 너무 깁니다"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "검색어가 너무 깁니다"))]
    pub hospital_name: Option<String>,

    pub department: Option<String>,

    pub specialty: Option<String>,

    pub limit: Option<u32>,

    pub offset: Option<u32>,
}

impl DoctorSearchQuery {
    pub fn criteria(&self) -> DoctorSearchCriteria {
        DoctorSearchCriteria {
            name: non_blank(&self.name),
            hospital_name: non_blank(&self.hospital_name),
            department: non_blank(&self.department),
            specialty: non_blank(&self.specialty),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}

/// 디렉터리 검색 응답
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryListResponse<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
}

impl<T> DirectoryListResponse<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            limit: pagination.limit,
            offset: pagination.offset,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_dropped() {
        let query = DoctorSearchQuery {
            name: Some("  ".to_string()),
            specialty: Some(" 정형외과 ".to_string()),
            ..Default::default()
        };

        let criteria = query.criteria();
        assert!(criteria.name.is_none());
        assert_eq!(criteria.specialty.as_deref(), Some("정형외과"));
    }
}
