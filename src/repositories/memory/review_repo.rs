use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{read, write};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::reviews::{Review, ReviewTarget};
use crate::domain::repositories::{Pagination, ReviewRepository, ReviewSearchCriteria};
use crate::domain::value_objects::{ReviewId, UserId};

#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<HashMap<ReviewId, Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_where(&self, predicate: impl Fn(&Review) -> bool) -> AppResult<Vec<Review>> {
        let mut found: Vec<Review> = read(self.reviews.read())?
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        // 최신순
        found.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().value().cmp(b.id().value()))
        });
        Ok(found)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: &ReviewId) -> AppResult<Option<Review>> {
        Ok(read(self.reviews.read())?.get(id).cloned())
    }

    async fn find_by_target(&self, target: &ReviewTarget) -> AppResult<Vec<Review>> {
        self.collect_where(|r| r.target() == target)
    }

    async fn find_by_author_id(&self, author_id: &UserId) -> AppResult<Vec<Review>> {
        self.collect_where(|r| r.author_id() == author_id)
    }

    async fn search(
        &self,
        criteria: &ReviewSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Review>> {
        Ok(pagination.apply(self.collect_where(|r| criteria.matches(r))?))
    }

    async fn count_by_author_id(&self, author_id: &UserId) -> AppResult<u64> {
        let reviews = read(self.reviews.read())?;
        Ok(reviews.values().filter(|r| r.author_id() == author_id).count() as u64)
    }

    async fn has_user_reviewed_target(
        &self,
        author_id: &UserId,
        target: &ReviewTarget,
    ) -> AppResult<bool> {
        let reviews = read(self.reviews.read())?;
        Ok(reviews
            .values()
            .any(|r| r.author_id() == author_id && r.target() == target))
    }

    async fn save(&self, review: &Review) -> AppResult<()> {
        let mut reviews = write(self.reviews.write())?;
        if reviews.contains_key(review.id()) {
            return Err(AppError::PersistenceError(format!(
                "review {} already exists",
                review.id()
            )));
        }
        if reviews
            .values()
            .any(|r| r.author_id() == review.author_id() && r.target() == review.target())
        {
            return Err(AppError::DuplicateReview);
        }
        reviews.insert(review.id().clone(), review.clone());
        Ok(())
    }

    async fn update(&self, review: &Review) -> AppResult<()> {
        let mut reviews = write(self.reviews.write())?;
        match reviews.get_mut(review.id()) {
            Some(existing) => {
                *existing = review.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!("review {}", review.id()))),
        }
    }

    async fn delete(&self, id: &ReviewId) -> AppResult<()> {
        match write(self.reviews.write())?.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("review {}", id))),
        }
    }
}
