//! 메모리 저장소
//!
//! `STORAGE_BACKEND=memory` 실행과 테스트에서 쓰는 구현입니다. `RwLock<HashMap>` 하나에
//! 엔티티를 보관하며, 유일성 검사는 쓰기 잠금 안에서 수행되므로 동시 가입 요청에서도
//! 중복이 저장되지 않습니다.

mod coordinator_repo;
mod doctor_repo;
mod review_repo;
mod user_repo;

use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

pub use coordinator_repo::InMemoryCoordinatorRepository;
pub use doctor_repo::InMemoryDoctorRepository;
pub use review_repo::InMemoryReviewRepository;
pub use user_repo::InMemoryUserRepository;

use crate::core::errors::AppError;

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::PersistenceError("in-memory store lock poisoned".to_string())
}

pub(crate) fn read<'a, T>(
    result: Result<RwLockReadGuard<'a, T>, PoisonError<RwLockReadGuard<'a, T>>>,
) -> Result<RwLockReadGuard<'a, T>, AppError> {
    result.map_err(poisoned)
}

pub(crate) fn write<'a, T>(
    result: Result<RwLockWriteGuard<'a, T>, PoisonError<RwLockWriteGuard<'a, T>>>,
) -> Result<RwLockWriteGuard<'a, T>, AppError> {
    result.map_err(poisoned)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use super::*;

    #[test]
    fn test_guards_pass_through() {
        let lock = RwLock::new(vec![1, 2]);
        write(lock.write()).unwrap().push(3);
        assert_eq!(*read(lock.read()).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_poisoned_lock_is_persistence_error() {
        let lock = Arc::new(RwLock::new(0));
        let poisoner = lock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(read(lock.read()), Err(AppError::PersistenceError(_))));
        assert!(matches!(write(lock.write()), Err(AppError::PersistenceError(_))));
    }
}
