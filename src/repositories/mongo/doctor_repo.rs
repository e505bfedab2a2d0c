use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::documents::DoctorDocument;
use super::{collect_all, contains_filter, persistence_error};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::doctors::Doctor;
use crate::domain::repositories::{DoctorRepository, DoctorSearchCriteria, Pagination};
use crate::domain::value_objects::DoctorId;

const COLLECTION: &str = "doctors";

#[derive(Clone)]
pub struct MongoDoctorRepository {
    collection: Collection<DoctorDocument>,
}

impl MongoDoctorRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection(COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_hospital_index = IndexModel::builder()
            .keys(doc! { "name": 1, "hospital_name": 1 })
            .options(
                IndexOptions::builder()
                    .name("name_hospital".to_string())
                    .build(),
            )
            .build();

        let specialty_index = IndexModel::builder()
            .keys(doc! { "specialties": 1 })
            .options(IndexOptions::builder().name("specialties".to_string()).build())
            .build();

        self.collection
            .create_indexes([name_hospital_index, specialty_index])
            .await
            .map_err(persistence_error)?;
        Ok(())
    }
}

fn search_filter(criteria: &DoctorSearchCriteria) -> Document {
    let mut filter = Document::new();
    if let Some(name) = &criteria.name {
        filter.insert("name", contains_filter(name));
    }
    if let Some(hospital_name) = &criteria.hospital_name {
        filter.insert("hospital_name", contains_filter(hospital_name));
    }
    if let Some(department) = &criteria.department {
        filter.insert("department", contains_filter(department));
    }
    if let Some(specialty) = &criteria.specialty {
        // 배열 필드에 정규식을 걸면 원소 중 하나라도 맞으면 일치
        filter.insert("specialties", contains_filter(specialty));
    }
    filter
}

#[async_trait]
impl DoctorRepository for MongoDoctorRepository {
    async fn find_by_id(&self, id: &DoctorId) -> AppResult<Option<Doctor>> {
        self.collection
            .find_one(doc! { "_id": id.value() })
            .await
            .map_err(persistence_error)?
            .map(DoctorDocument::into_doctor)
            .transpose()
    }

    async fn find_by_name_and_hospital(
        &self,
        name: &str,
        hospital_name: &str,
    ) -> AppResult<Option<Doctor>> {
        self.collection
            .find_one(doc! { "name": name, "hospital_name": hospital_name })
            .await
            .map_err(persistence_error)?
            .map(DoctorDocument::into_doctor)
            .transpose()
    }

    async fn search(
        &self,
        criteria: &DoctorSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Doctor>> {
        let cursor = self
            .collection
            .find(search_filter(criteria))
            .sort(doc! { "name": 1, "_id": 1 })
            .skip(u64::from(pagination.offset))
            .limit(i64::from(pagination.limit))
            .await
            .map_err(persistence_error)?;

        collect_all(cursor)
            .await?
            .into_iter()
            .map(DoctorDocument::into_doctor)
            .collect()
    }

    async fn save(&self, doctor: &Doctor) -> AppResult<()> {
        self.collection
            .insert_one(DoctorDocument::from(doctor))
            .await
            .map_err(persistence_error)?;
        Ok(())
    }

    async fn update(&self, doctor: &Doctor) -> AppResult<()> {
        let result = self
            .collection
            .replace_one(doc! { "_id": doctor.id().value() }, DoctorDocument::from(doctor))
            .await
            .map_err(persistence_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("doctor {}", doctor.id())));
        }
        Ok(())
    }

    async fn delete(&self, id: &DoctorId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.value() })
            .await
            .map_err(persistence_error)?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("doctor {}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialty_filter_targets_array_field() {
        let criteria = DoctorSearchCriteria {
            specialty: Some("정형".to_string()),
            ..Default::default()
        };
        let filter = search_filter(&criteria);
        let specialty = filter.get_document("specialties").unwrap();
        assert_eq!(specialty.get_str("$regex").unwrap(), "정형");
    }
}
