use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::documents::ReviewDocument;
use super::{collect_all, duplicate_key_message, persistence_error};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::reviews::{Review, ReviewTarget};
use crate::domain::repositories::{Pagination, ReviewRepository, ReviewSearchCriteria};
use crate::domain::value_objects::{ReviewId, UserId};

const COLLECTION: &str = "reviews";

#[derive(Clone)]
pub struct MongoReviewRepository {
    collection: Collection<ReviewDocument>,
}

impl MongoReviewRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection(COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let author_target_index = IndexModel::builder()
            .keys(doc! { "author_id": 1, "target_type": 1, "target_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("author_target_unique".to_string())
                    .build(),
            )
            .build();

        let target_index = IndexModel::builder()
            .keys(doc! { "target_type": 1, "target_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("target_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([author_target_index, target_index])
            .await
            .map_err(persistence_error)?;
        Ok(())
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<Review>> {
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(persistence_error)?;

        collect_all(cursor)
            .await?
            .into_iter()
            .map(ReviewDocument::into_review)
            .collect()
    }
}

fn target_filter(target: &ReviewTarget) -> Document {
    doc! {
        "target_type": target.target_type().as_str(),
        "target_id": target.id(),
    }
}

fn search_filter(criteria: &ReviewSearchCriteria) -> Document {
    let mut filter = criteria
        .target
        .as_ref()
        .map(target_filter)
        .unwrap_or_default();

    if let Some(author_id) = &criteria.author_id {
        filter.insert("author_id", author_id.value());
    }

    let mut average = Document::new();
    if let Some(min) = criteria.min_rating {
        average.insert("$gte", min);
    }
    if let Some(max) = criteria.max_rating {
        average.insert("$lte", max);
    }
    if !average.is_empty() {
        filter.insert("average_rating", average);
    }
    filter
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn find_by_id(&self, id: &ReviewId) -> AppResult<Option<Review>> {
        self.collection
            .find_one(doc! { "_id": id.value() })
            .await
            .map_err(persistence_error)?
            .map(ReviewDocument::into_review)
            .transpose()
    }

    async fn find_by_target(&self, target: &ReviewTarget) -> AppResult<Vec<Review>> {
        self.find_many(target_filter(target)).await
    }

    async fn find_by_author_id(&self, author_id: &UserId) -> AppResult<Vec<Review>> {
        self.find_many(doc! { "author_id": author_id.value() }).await
    }

    async fn search(
        &self,
        criteria: &ReviewSearchCriteria,
        pagination: Pagination,
    ) -> AppResult<Vec<Review>> {
        let cursor = self
            .collection
            .find(search_filter(criteria))
            .sort(doc! { "created_at": -1, "_id": 1 })
            .skip(u64::from(pagination.offset))
            .limit(i64::from(pagination.limit))
            .await
            .map_err(persistence_error)?;

        collect_all(cursor)
            .await?
            .into_iter()
            .map(ReviewDocument::into_review)
            .collect()
    }

    async fn count_by_author_id(&self, author_id: &UserId) -> AppResult<u64> {
        self.collection
            .count_documents(doc! { "author_id": author_id.value() })
            .await
            .map_err(persistence_error)
    }

    async fn has_user_reviewed_target(
        &self,
        author_id: &UserId,
        target: &ReviewTarget,
    ) -> AppResult<bool> {
        let mut filter = target_filter(target);
        filter.insert("author_id", author_id.value());

        let count = self
            .collection
            .count_documents(filter)
            .await
            .map_err(persistence_error)?;
        Ok(count > 0)
    }

    async fn save(&self, review: &Review) -> AppResult<()> {
        self.collection
            .insert_one(ReviewDocument::from(review))
            .await
            .map_err(|e| match duplicate_key_message(&e) {
                Some(_) => AppError::DuplicateReview,
                None => persistence_error(e),
            })?;
        Ok(())
    }

    async fn update(&self, review: &Review) -> AppResult<()> {
        let result = self
            .collection
            .replace_one(doc! { "_id": review.id().value() }, ReviewDocument::from(review))
            .await
            .map_err(persistence_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("review {}", review.id())));
        }
        Ok(())
    }

    async fn delete(&self, id: &ReviewId) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.value() })
            .await
            .map_err(persistence_error)?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("review {}", id)));
        }
        Ok(())
    }
}
