use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{read, write};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::doctors::Doctor;
use crate::domain::repositories::{
    contains_ignore_case, DoctorRepository, DoctorSearchCriteria, Pagination,
};
use crate::domain::value_objects::DoctorId;

#[derive(Default)]
pub struct InMemoryDoctorRepository {
    doctors: RwLock<HashMap<DoctorId, Doctor>>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(criteria: &DoctorSearchCriteria, d: &Doctor) -> bool {
    let field = |filter: &Option<String>, value: Option<&str>| match filter.as_deref() {
        None | Some("") => true,
        Some(filter) => value.is_some_and(|v| contains_ignore_case(v, filter)),
    };

    let specialty = match criteria.specialty.as_deref() {
        None | Some("") => true,
        Some(filter) => d.specialties().iter().any(|s| contains_ignore_case(s, filter)),
    };

    field(&criteria.name, Some(d.name()))
        && field(&criteria.hospital_name, Some(d.hospital_name()))
        && field(&criteria.department, d.department())
        && specialty
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn find_by_id(&self, id: &DoctorId) -> AppResult<Option<Doctor>> {
        Ok(read(self.doctors.read())?.get(id).cloned())
    }

    async fn find_by_name_and_hospital(
        &self,
        name: &str,
        hospital_name: &str,
    ) -> AppResult<Option<Doctor>> {
        Ok(read(self.doctors.read())?
            .values()
            .find(|d| d.name() == name && d.hospital_name() == hospital_name)
            .cloned())
    }

    async fn search(
        &self,
        criteria: &DoctorSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Doctor>> {
        let mut found: Vec<Doctor> = read(self.doctors.read())?
            .values()
            .filter(|d| matches(criteria, d))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().value().cmp(b.id().value())));
        Ok(pagination.apply(found))
    }

    async fn save(&self, doctor: &Doctor) -> AppResult<()> {
        let mut doctors = write(self.doctors.write())?;
        if doctors.contains_key(doctor.id()) {
            return Err(AppError::PersistenceError(format!(
                "doctor {} already exists",
                doctor.id()
            )));
        }
        doctors.insert(doctor.id().clone(), doctor.clone());
        Ok(())
    }

    async fn update(&self, doctor: &Doctor) -> AppResult<()> {
        let mut doctors = write(self.doctors.write())?;
        match doctors.get_mut(doctor.id()) {
            Some(existing) => {
                *existing = doctor.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!("doctor {}", doctor.id()))),
        }
    }

    async fn delete(&self, id: &DoctorId) -> AppResult<()> {
        match write(self.doctors.write())?.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("doctor {}", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::doctors::DoctorProps;

    #[actix_web::test]
    async fn test_search_by_specialty() {
        let repo = InMemoryDoctorRepository::new();
        for (name, specialties) in [("강의사", vec!["Dermatology", "레이저"]), ("윤의사", vec!["내과"])] {
            let mut props = DoctorProps::new(name, "서울의원");
            props.specialties = specialties.into_iter().map(str::to_string).collect();
            repo.save(&Doctor::create(props).unwrap()).await.unwrap();
        }

        let criteria = DoctorSearchCriteria {
            specialty: Some("derma".to_string()),
            ..Default::default()
        };
        let found = repo.search(&criteria, Pagination::default()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "강의사");

        let all = repo
            .search(&DoctorSearchCriteria::default(), Pagination::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[actix_web::test]
    async fn test_update_missing_doctor_fails() {
        let repo = InMemoryDoctorRepository::new();
        let doctor = Doctor::create(DoctorProps::new("강의사", "서울의원")).unwrap();
        assert!(matches!(repo.update(&doctor).await, Err(AppError::NotFound(_))));
    }
}
