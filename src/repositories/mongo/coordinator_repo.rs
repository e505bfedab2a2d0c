use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::documents::CoordinatorDocument;
use super::{collect_all, contains_filter, persistence_error};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::coordinators::Coordinator;
use crate::domain::repositories::{CoordinatorRepository, CoordinatorSearchCriteria, Pagination};
use crate::domain::value_objects::CoordinatorId;

const COLLECTION: &str = "coordinators";

#[derive(Clone)]
pub struct MongoCoordinatorRepository {
    collection: Collection<CoordinatorDocument>,
}

impl MongoCoordinatorRepository {
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

        self.collection
            .create_indexes([name_hospital_index])
            .await
            .map_err(persistence_error)?;
        Ok(())
    }
}

fn search_filter(criteria: &CoordinatorSearchCriteria) -> Document {
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
    filter
}

#[async_trait]
impl CoordinatorRepository for MongoCoordinatorRepository {
    async fn find_by_id(&self, id: &CoordinatorId) -> AppResult<Option<Coordinator>> {
        self.collection
            .find_one(doc! { "_id": id.value() })
            .await
            .map_err(persistence_error)?
            .map(CoordinatorDocument::into_coordinator)
            .transpose()
    }

    async fn find_by_name_and_hospital(
        &self,
        name: &str,
        hospital_name: &str,
    ) -> AppResult<Option<Coordinator>> {
        self.collection
            .find_one(doc! { "name": name, "hospital_name": hospital_name })
            .await
            .map_err(persistence_error)?
            .map(CoordinatorDocument::into_coordinator)
            .transpose()
    }

    async fn search(
        &self,
        criteria: &CoordinatorSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Coordinator>> {
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
            .map(CoordinatorDocument::into_coordinator)
            .collect()
    }

    async fn save(&self, coordinator: &Coordinator) -> AppResult<()> {
        self.collection
            .insert_one(CoordinatorDocument::from(coordinator))
            .await
            .map_err(persistence_error)?;
        Ok(())
    }

    async fn update(&self, coordinator: &Coordinator) -> AppResult<()> {
        let result = self
            .collection
            .replace_one(
                doc! { "_id": coordinator.id().value() },
                CoordinatorDocument::from(coordinator),
            )
            .await
            .map_err(persistence_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("coordinator {}", coordinator.id())));
        }
        Ok(())
    }

    async fn delete(&self, id: &CoordinatorId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.value() })
            .await
            .map_err(persistence_error)?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("coordinator {}", id)));
        }
        Ok(())
    }
}
