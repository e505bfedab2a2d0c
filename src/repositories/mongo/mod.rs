//! MongoDB 저장소 구현
//!
//! | 컬렉션 | 저장소 | 유일 인덱스 |
//! |--------|--------|-------------|
//! | `users` | [`MongoUserRepository`] | `email_unique`, `license_unique`(sparse), `business_unique`(sparse) |
//! | `coordinators` | [`MongoCoordinatorRepository`] | - |
//! | `doctors` | [`MongoDoctorRepository`] | - |
//! | `reviews` | [`MongoReviewRepository`] | `author_target_unique` |
//!
//! 유스케이스의 중복 확인과 별개로 유일 인덱스가 동시 요청 경쟁을 막습니다.
//! 인덱스 위반(에러 코드 11000)은 해당 `Duplicate*` 에러로 바뀝니다.

pub mod coordinator_repo;
pub mod doctor_repo;
pub mod documents;
pub mod review_repo;
pub mod user_repo;

pub use coordinator_repo::MongoCoordinatorRepository;
pub use doctor_repo::MongoDoctorRepository;
pub use review_repo::MongoReviewRepository;
pub use user_repo::MongoUserRepository;

use futures_util::TryStreamExt;
use mongodb::Cursor;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use serde::de::DeserializeOwned;

use crate::core::errors::{AppError, AppResult};

const DUPLICATE_KEY_CODE: i32 = 11000;

pub(crate) fn persistence_error(error: MongoError) -> AppError {
    AppError::PersistenceError(error.to_string())
}

/// 유일 인덱스 위반이면 서버 메시지(위반한 인덱스 이름 포함)를 돌려줍니다.
pub(crate) fn duplicate_key_message(error: &MongoError) -> Option<&str> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.as_str())
        }
        _ => None,
    }
}

/// 대소문자 무시 부분 일치 조건. 입력은 정규식으로 해석되지 않도록 이스케이프합니다.
pub(crate) fn contains_filter(value: &str) -> Document {
    doc! { "$regex": regex::escape(value), "$options": "i" }
}

pub(crate) async fn collect_all<T>(cursor: Cursor<T>) -> AppResult<Vec<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    cursor.try_collect().await.map_err(persistence_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_filter_escapes_regex() {
        let filter = contains_filter("a.b(c)");
        assert_eq!(filter.get_str("$regex").unwrap(), r"a\.b\(c\)");
        assert_eq!(filter.get_str("$options").unwrap(), "i");
    }
}
