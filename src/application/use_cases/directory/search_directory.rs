use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::domain::dto::{CoordinatorSearchQuery, DoctorSearchQuery};
use crate::domain::entities::coordinators::Coordinator;
use crate::domain::entities::doctors::Doctor;
use crate::domain::repositories::{CoordinatorRepository, DoctorRepository};

#[derive(Clone)]
pub struct SearchCoordinatorsUseCase {
    coordinator_repo: Arc<dyn CoordinatorRepository>,
}

impl SearchCoordinatorsUseCase {
    pub fn new(coordinator_repo: Arc<dyn CoordinatorRepository>) -> Self {
        Self { coordinator_repo }
    }

    pub async fn execute(&self, query: &CoordinatorSearchQuery) -> AppResult<Vec<Coordinator>> {
        self.coordinator_repo
            .search(&query.criteria(), query.pagination())
            .await
    }
}

#[derive(Clone)]
pub struct SearchDoctorsUseCase {
    doctor_repo: Arc<dyn DoctorRepository>,
}

impl SearchDoctorsUseCase {
    pub fn new(doctor_repo: Arc<dyn DoctorRepository>) -> Self {
        Self { doctor_repo }
    }

    pub async fn execute(&self, query: &DoctorSearchQuery) -> AppResult<Vec<Doctor>> {
        self.doctor_repo
            .search(&query.criteria(), query.pagination())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::coordinator;
    use crate::domain::entities::doctors::{DoctorProfileUpdate, DoctorProps};
    use crate::repositories::memory::{InMemoryCoordinatorRepository, InMemoryDoctorRepository};

    #[actix_web::test]
    async fn test_search_coordinators_by_partial_name() {
        let repo = Arc::new(InMemoryCoordinatorRepository::new());
        for name in ["김실장", "김팀장", "최실장"] {
            repo.save(&coordinator(name)).await.unwrap();
        }
        let use_case = SearchCoordinatorsUseCase::new(repo);

        let query = CoordinatorSearchQuery {
            name: Some("실장".to_string()),
            limit: Some(1),
            ..Default::default()
        };
        let found = use_case.execute(&query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "김실장");
    }

    #[actix_web::test]
    async fn test_search_doctors_by_specialty() {
        let repo = Arc::new(InMemoryDoctorRepository::new());
        let mut ortho = Doctor::create(DoctorProps::new("이의사", "서울중앙병원")).unwrap();
        ortho
            .update_profile(DoctorProfileUpdate {
                specialties: Some(vec!["정형외과".to_string()]),
                ..Default::default()
            })
            .unwrap();
        repo.save(&ortho).await.unwrap();
        repo.save(&Doctor::create(DoctorProps::new("박의사", "서울중앙병원")).unwrap())
            .await
            .unwrap();

        let use_case = SearchDoctorsUseCase::new(repo);
        let query = DoctorSearchQuery {
            specialty: Some("정형".to_string()),
            ..Default::default()
        };
        let found = use_case.execute(&query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), ortho.id());
    }
}
