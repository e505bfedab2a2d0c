//! MongoDB 사용자 저장소 + Redis 캐시
//!
//! `find_by_id` / `find_by_email` 결과를 10분간 캐시합니다. 캐시 장애는 경고만
//! 남기고 DB 조회로 진행합니다. `update` / `delete` 시 두 캐시 키를 모두 지웁니다.

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::documents::UserDocument;
use super::{duplicate_key_message, persistence_error};
use crate::caching::redis::RedisClient;
use crate::config::CacheConfig;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::{BusinessNumber, Email, MedicalLicenseNumber, UserId};

const COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
    redis: Option<RedisClient>,
    cache_ttl_seconds: usize,
}

impl MongoUserRepository {
    /// `redis`가 `None`이면 캐시 없이 동작합니다.
    pub fn new(db: &Database, redis: Option<RedisClient>) -> Self {
        Self {
            collection: db.get_database().collection(COLLECTION),
            redis,
            cache_ttl_seconds: CacheConfig::user_ttl_seconds(),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let license_index = IndexModel::builder()
            .keys(doc! { "medical_license_number": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("license_unique".to_string())
                    .build(),
            )
            .build();

        let business_index = IndexModel::builder()
            .keys(doc! { "business_number": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("business_unique".to_string())
                    .build(),
            )
            .build();

        let status_index = IndexModel::builder()
            .keys(doc! { "verification_status": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("status_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, license_index, business_index, status_index])
            .await
            .map_err(persistence_error)?;

        Ok(())
    }

    fn id_cache_key(id: &str) -> String {
        format!("user:id:{}", id)
    }

    fn email_cache_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    /// 로그에 남길 키. 이메일 키는 주소를 가립니다.
    fn loggable_key(key: &str) -> &str {
        if key.starts_with("user:email:") {
            "user:email:*"
        } else {
            key
        }
    }

    async fn cached(&self, key: &str) -> Option<UserDocument> {
        let redis = self.redis.as_ref()?;
        match redis.get::<UserDocument>(key).await {
            Ok(document) => document,
            Err(e) => {
                log::warn!("User cache read failed for {}: {}", Self::loggable_key(key), e);
                None
            }
        }
    }

    async fn store_cache(&self, document: &UserDocument) {
        let Some(redis) = &self.redis else {
            return;
        };
        for key in [
            Self::id_cache_key(&document.id),
            Self::email_cache_key(&document.email),
        ] {
            if let Err(e) = redis
                .set_with_expiry(&key, document, self.cache_ttl_seconds)
                .await
            {
                log::warn!(
                    "User cache write failed for {}: {}",
                    Self::loggable_key(&key),
                    e
                );
            }
        }
    }

    async fn invalidate_cache(&self, id: &str, email: Option<&str>) {
        let Some(redis) = &self.redis else {
            return;
        };
        let mut keys = vec![Self::id_cache_key(id)];
        if let Some(email) = email {
            keys.push(Self::email_cache_key(email));
        }
        if let Err(e) = redis.del_multiple(&keys).await {
            log::warn!("User cache invalidation failed for {}: {}", id, e);
        }
    }

    async fn find_one(&self, filter: Document, cache_key: Option<String>) -> AppResult<Option<User>> {
        if let Some(key) = &cache_key {
            if let Some(document) = self.cached(key).await {
                return document.into_user().map(Some);
            }
        }

        let document = self
            .collection
            .find_one(filter)
            .await
            .map_err(persistence_error)?;

        match document {
            Some(document) => {
                if cache_key.is_some() {
                    self.store_cache(&document).await;
                }
                document.into_user().map(Some)
            }
            None => Ok(None),
        }
    }
}

/// 위반한 인덱스 이름으로 중복 종류를 고릅니다.
fn map_write_error(error: mongodb::error::Error) -> AppError {
    match duplicate_key_message(&error) {
        Some(message) if message.contains("license_unique") => AppError::DuplicateLicense,
        Some(message) if message.contains("business_unique") => AppError::DuplicateBusinessNumber,
        Some(message) if message.contains("email_unique") => AppError::DuplicateEmail,
        Some(message) => AppError::PersistenceError(format!("duplicate key: {}", message)),
        None => persistence_error(error),
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.find_one(doc! { "_id": id.value() }, Some(Self::id_cache_key(id.value())))
            .await
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        self.find_one(
            doc! { "email": email.value() },
            Some(Self::email_cache_key(email.value())),
        )
        .await
    }

    async fn find_by_medical_license_number(
        &self,
        license: &MedicalLicenseNumber,
    ) -> AppResult<Option<User>> {
        self.find_one(doc! { "medical_license_number": license.value() }, None)
            .await
    }

    async fn find_by_business_number(&self, number: &BusinessNumber) -> AppResult<Option<User>> {
        self.find_one(doc! { "business_number": number.value() }, None)
            .await
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        self.collection
            .insert_one(UserDocument::from(user))
            .await
            .map_err(map_write_error)?;
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let document = UserDocument::from(user);
        let result = self
            .collection
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .await
            .map_err(map_write_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("user {}", user.id())));
        }

        self.invalidate_cache(&document.id, Some(&document.email)).await;
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        let existing = self
            .collection
            .find_one_and_delete(doc! { "_id": id.value() })
            .await
            .map_err(persistence_error)?;

        let Some(existing) = existing else {
            return Err(AppError::NotFound(format!("user {}", id)));
        };

        self.invalidate_cache(&existing.id, Some(&existing.email)).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys_and_log_redaction() {
        let email_key = MongoUserRepository::email_cache_key("staff@hospital.kr");
        let id_key = MongoUserRepository::id_cache_key("550e8400-e29b-41d4-a716-446655440000");

        assert_eq!(email_key, "user:email:staff@hospital.kr");
        assert_eq!(MongoUserRepository::loggable_key(&email_key), "user:email:*");
        assert_eq!(MongoUserRepository::loggable_key(&id_key), id_key);
    }
}
