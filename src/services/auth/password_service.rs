//! bcrypt 비밀번호 해싱
//!
//! 평문 비밀번호는 저장하거나 로그에 남기지 않습니다. bcrypt 해시는 레코드마다 다른 솔트를 포함합니다.

use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// 존재하지 않는 계정 로그인에서 비교 대상으로 쓰는 평문
const DUMMY_PASSWORD: &str = "hospital-review-dummy-password";

#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
    /// 같은 cost로 만든 더미 해시. 처음 필요할 때 한 번 생성합니다.
    dummy_hash: Arc<OnceCell<String>>,
    #[cfg(test)]
    verify_calls: Arc<AtomicUsize>,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_hash: Arc::new(OnceCell::new()),
            #[cfg(test)]
            verify_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// `BCRYPT_COST` 또는 실행 환경별 기본 cost 사용
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// 해시 형식이 깨진 경우도 불일치로 취급합니다.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        #[cfg(test)]
        self.verify_calls.fetch_add(1, Ordering::SeqCst);

        bcrypt::verify(password, hash).unwrap_or_else(|e| {
            log::warn!("저장된 비밀번호 해시 검증 실패: {}", e);
            false
        })
    }

    /// 계정이 없을 때도 실제 계정과 같은 비용의 bcrypt 검증을 수행합니다. 항상 `false`.
    pub fn verify_against_dummy(&self, password: &str) -> bool {
        match self
            .dummy_hash
            .get_or_try_init(|| bcrypt::hash(DUMMY_PASSWORD, self.cost))
        {
            Ok(hash) => {
                self.verify(password, hash);
            }
            Err(e) => log::warn!("더미 비밀번호 해시 생성 실패: {}", e),
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::from_config()
    }
}
