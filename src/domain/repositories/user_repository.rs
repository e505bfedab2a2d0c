use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;
use crate::domain::value_objects::{BusinessNumber, Email, MedicalLicenseNumber, UserId};

/// 사용자 저장소
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    async fn find_by_medical_license_number(
        &self,
        license: &MedicalLicenseNumber,
    ) -> AppResult<Option<User>>;

    async fn find_by_business_number(&self, number: &BusinessNumber) -> AppResult<Option<User>>;

    /// 신규 저장. 이메일/면허번호/사업자번호가 겹치면 `Duplicate*` 에러를 돌려줍니다.
    async fn save(&self, user: &User) -> AppResult<()>;

    /// 기존 사용자 갱신. 없으면 `NotFound`.
    async fn update(&self, user: &User) -> AppResult<()>;

    /// 없는 ID면 `NotFound`.
    async fn delete(&self, id: &UserId) -> AppResult<()>;
}
