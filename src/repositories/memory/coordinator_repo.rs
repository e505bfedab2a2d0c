use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{read, write};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::coordinators::Coordinator;
use crate::domain::repositories::{
    contains_ignore_case, CoordinatorRepository, CoordinatorSearchCriteria, Pagination,
};
use crate::domain::value_objects::CoordinatorId;

#[derive(Default)]
pub struct InMemoryCoordinatorRepository {
    coordinators: RwLock<HashMap<CoordinatorId, Coordinator>>,
}

impl InMemoryCoordinatorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(criteria: &CoordinatorSearchCriteria, c: &Coordinator) -> bool {
    let field = |filter: &Option<String>, value: Option<&str>| match filter.as_deref() {
        None | Some("") => true,
        Some(filter) => value.is_some_and(|v| contains_ignore_case(v, filter)),
    };

    field(&criteria.name, Some(c.name()))
        && field(&criteria.hospital_name, Some(c.hospital_name()))
        && field(&criteria.department, c.department())
}

#[async_trait]
impl CoordinatorRepository for InMemoryCoordinatorRepository {
    async fn find_by_id(&self, id: &CoordinatorId) -> AppResult<Option<Coordinator>> {
        Ok(read(self.coordinators.read())?.get(id).cloned())
    }

    async fn find_by_name_and_hospital(
        &self,
        name: &str,
        hospital_name: &str,
    ) -> AppResult<Option<Coordinator>> {
        Ok(read(self.coordinators.read())?
            .values()
            .find(|c| c.name() == name && c.hospital_name() == hospital_name)
            .cloned())
    }

    async fn search(
        &self,
        criteria: &CoordinatorSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Coordinator>> {
        let mut found: Vec<Coordinator> = read(self.coordinators.read())?
            .values()
            .filter(|c| matches(criteria, c))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().value().cmp(b.id().value())));
        Ok(pagination.apply(found))
    }

    async fn save(&self, coordinator: &Coordinator) -> AppResult<()> {
        let mut coordinators = write(self.coordinators.write())?;
        if coordinators.contains_key(coordinator.id()) {
            return Err(AppError::PersistenceError(format!(
                "coordinator {} already exists",
                coordinator.id()
            )));
        }
        coordinators.insert(coordinator.id().clone(), coordinator.clone());
        Ok(())
    }

    async fn update(&self, coordinator: &Coordinator) -> AppResult<()> {
        let mut coordinators = write(self.coordinators.write())?;
        match coordinators.get_mut(coordinator.id()) {
            Some(existing) => {
                *existing = coordinator.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!("coordinator {}", coordinator.id()))),
        }
    }

    async fn delete(&self, id: &CoordinatorId) -> AppResult<()> {
        match write(self.coordinators.write())?.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("coordinator {}", id))),
        }
    }
}
