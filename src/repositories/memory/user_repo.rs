use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{read, write};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::{BusinessNumber, Email, MedicalLicenseNumber, UserId};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_where(&self, predicate: impl Fn(&User) -> bool) -> AppResult<Option<User>> {
        let users = read(self.users.read())?;
        Ok(users.values().find(|u| predicate(u)).cloned())
    }

    /// 다른 사용자와 겹치는 유일 키가 있으면 해당 `Duplicate*` 에러
    fn check_unique(users: &HashMap<UserId, User>, user: &User) -> AppResult<()> {
        for other in users.values().filter(|u| u.id() != user.id()) {
            if other.email() == user.email() {
                return Err(AppError::DuplicateEmail);
            }
            if user.medical_license_number().is_some()
                && other.medical_license_number() == user.medical_license_number()
            {
                return Err(AppError::DuplicateLicense);
            }
            if user.business_number().is_some() && other.business_number() == user.business_number()
            {
                return Err(AppError::DuplicateBusinessNumber);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(read(self.users.read())?.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        self.find_where(|u| u.email() == email)
    }

    async fn find_by_medical_license_number(
        &self,
        license: &MedicalLicenseNumber,
    ) -> AppResult<Option<User>> {
        self.find_where(|u| u.medical_license_number() == Some(license))
    }

    async fn find_by_business_number(&self, number: &BusinessNumber) -> AppResult<Option<User>> {
        self.find_where(|u| u.business_number() == Some(number))
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let mut users = write(self.users.write())?;
        if users.contains_key(user.id()) {
            return Err(AppError::PersistenceError(format!(
                "user {} already exists",
                user.id()
            )));
        }
        Self::check_unique(&users, user)?;
        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut users = write(self.users.write())?;
        if !users.contains_key(user.id()) {
            return Err(AppError::NotFound(format!("user {}", user.id())));
        }
        Self::check_unique(&users, user)?;
        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        match write(self.users.write())?.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("user {}", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserProps;
    use crate::domain::value_objects::VerificationCredential;

    fn user(email: &str, license: Option<&str>) -> User {
        let mut props = UserProps::new_staff(
            Email::create(email).unwrap(),
            "hash".to_string(),
            "직원",
            "병원",
        );
        props.credential = license.map(|l| {
            VerificationCredential::MedicalLicense(MedicalLicenseNumber::create(l).unwrap())
        });
        User::create(props).unwrap()
    }

    #[actix_web::test]
    async fn test_save_and_lookup_by_natural_keys() {
        let repo = InMemoryUserRepository::new();
        let saved = user("a@hospital.kr", Some("12345"));
        repo.save(&saved).await.unwrap();

        let by_email = repo
            .find_by_email(&Email::create("A@Hospital.kr").unwrap())
            .await
            .unwrap();
        assert_eq!(by_email.as_ref().map(|u| u.id()), Some(saved.id()));

        let by_license = repo
            .find_by_medical_license_number(&MedicalLicenseNumber::create("12345").unwrap())
            .await
            .unwrap();
        assert!(by_license.is_some());

        assert!(repo.find_by_id(&UserId::generate()).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_unique_keys_enforced_on_save() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("a@hospital.kr", Some("12345"))).await.unwrap();

        assert!(matches!(
            repo.save(&user("a@hospital.kr", None)).await,
            Err(AppError::DuplicateEmail)
        ));
        assert!(matches!(
            repo.save(&user("b@hospital.kr", Some("12345"))).await,
            Err(AppError::DuplicateLicense)
        ));
        repo.save(&user("c@hospital.kr", None)).await.unwrap();
        repo.save(&user("d@hospital.kr", None)).await.unwrap();
    }

    #[actix_web::test]
    async fn test_update_requires_existing_and_delete_removes() {
        let repo = InMemoryUserRepository::new();
        let mut u = user("a@hospital.kr", None);

        assert!(matches!(repo.update(&u).await, Err(AppError::NotFound(_))));

        repo.save(&u).await.unwrap();
        u.verify().unwrap();
        repo.update(&u).await.unwrap();
        assert!(repo.find_by_id(u.id()).await.unwrap().unwrap().is_verified());

        repo.delete(u.id()).await.unwrap();
        assert!(repo.find_by_id(u.id()).await.unwrap().is_none());
        assert!(matches!(repo.delete(u.id()).await, Err(AppError::NotFound(_))));
    }
}
