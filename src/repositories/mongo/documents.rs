//! MongoDB 문서 매핑
//!
//! 엔티티는 직렬화 형식을 모르므로 컬렉션마다 문서 구조체를 두고 양방향으로 변환합니다.
//! 문서에서 엔티티로 돌아올 때 값 객체 검증을 다시 거치며, 실패하면 저장된 데이터가
//! 손상된 것으로 보고 `PersistenceError`를 돌려줍니다.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::coordinators::{Coordinator, CoordinatorProps};
use crate::domain::entities::doctors::{Doctor, DoctorProps};
use crate::domain::entities::reviews::{Review, ReviewProps, ReviewRatings, ReviewTarget, TargetType};
use crate::domain::entities::users::{User, UserProps, UserRole, VerificationStatus};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{
    BusinessNumber, CoordinatorId, DoctorId, Email, MedicalLicenseNumber, PhoneNumber, Rating,
    ReviewId, UserId, VerificationCredential,
};

fn to_bson_datetime(value: ChronoDateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

fn to_chrono(value: DateTime) -> AppResult<ChronoDateTime<Utc>> {
    ChronoDateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| AppError::PersistenceError("timestamp out of range".to_string()))
}

fn corrupted(collection: &str, id: &str, error: DomainError) -> AppError {
    AppError::PersistenceError(format!("corrupted {} document {}: {}", collection, id, error))
}

/// `users` 컬렉션 문서
///
/// 면허번호/사업자번호는 값이 없을 때 필드 자체를 생략합니다. sparse 유일 인덱스가
/// 빈 값끼리 충돌하지 않도록 하기 위함입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub hospital_name: String,
    pub role: String,
    pub verification_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,
    #[serde(default)]
    pub verification_documents: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value().to_string(),
            email: user.email().value().to_string(),
            password_hash: user.password_hash().to_string(),
            name: user.name().to_string(),
            hospital_name: user.hospital_name().to_string(),
            role: user.role().as_str().to_string(),
            verification_status: user.verification_status().as_str().to_string(),
            medical_license_number: user.medical_license_number().map(|n| n.value().to_string()),
            business_number: user.business_number().map(|n| n.value().to_string()),
            verification_documents: user.verification_documents().to_vec(),
            created_at: to_bson_datetime(user.created_at()),
            updated_at: to_bson_datetime(user.updated_at()),
        }
    }
}

impl UserDocument {
    pub fn into_user(self) -> AppResult<User> {
        let bad = |e| corrupted("user", &self.id, e);

        let role = UserRole::from_string(&self.role).ok_or_else(|| {
            AppError::PersistenceError(format!("unknown role {} on user {}", self.role, self.id))
        })?;
        let status = VerificationStatus::from_string(&self.verification_status).ok_or_else(|| {
            AppError::PersistenceError(format!(
                "unknown verification status {} on user {}",
                self.verification_status, self.id
            ))
        })?;

        let credential = match (&self.medical_license_number, &self.business_number) {
            (Some(license), _) => Some(VerificationCredential::MedicalLicense(
                MedicalLicenseNumber::create(license).map_err(bad)?,
            )),
            (None, Some(number)) => Some(VerificationCredential::BusinessNumber(
                BusinessNumber::create(number).map_err(bad)?,
            )),
            (None, None) => None,
        };

        let props = UserProps {
            id: Some(UserId::from_string(&self.id).map_err(bad)?),
            email: Email::create(&self.email).map_err(bad)?,
            password_hash: self.password_hash.clone(),
            name: self.name.clone(),
            hospital_name: self.hospital_name.clone(),
            role,
            verification_status: status,
            credential,
            verification_documents: self.verification_documents.clone(),
            created_at: Some(to_chrono(self.created_at)?),
            updated_at: Some(to_chrono(self.updated_at)?),
        };

        User::create(props).map_err(bad)
    }
}

/// `coordinators` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub hospital_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<&Coordinator> for CoordinatorDocument {
    fn from(coordinator: &Coordinator) -> Self {
        Self {
            id: coordinator.id().value().to_string(),
            name: coordinator.name().to_string(),
            hospital_name: coordinator.hospital_name().to_string(),
            position: coordinator.position().map(str::to_string),
            department: coordinator.department().map(str::to_string),
            phone_number: coordinator.phone_number().map(|p| p.value().to_string()),
            email: coordinator.email().map(|e| e.value().to_string()),
            created_at: to_bson_datetime(coordinator.created_at()),
            updated_at: to_bson_datetime(coordinator.updated_at()),
        }
    }
}

impl CoordinatorDocument {
    pub fn into_coordinator(self) -> AppResult<Coordinator> {
        let bad = |e| corrupted("coordinator", &self.id, e);

        let props = CoordinatorProps {
            id: Some(CoordinatorId::from_string(&self.id).map_err(bad)?),
            name: self.name.clone(),
            hospital_name: self.hospital_name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            phone_number: self
                .phone_number
                .as_deref()
                .map(PhoneNumber::create)
                .transpose()
                .map_err(bad)?,
            email: self.email.as_deref().map(Email::create).transpose().map_err(bad)?,
            created_at: Some(to_chrono(self.created_at)?),
            updated_at: Some(to_chrono(self.updated_at)?),
        };

        Coordinator::create(props).map_err(bad)
    }
}

/// `doctors` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub hospital_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<&Doctor> for DoctorDocument {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id().value().to_string(),
            name: doctor.name().to_string(),
            hospital_name: doctor.hospital_name().to_string(),
            position: doctor.position().map(str::to_string),
            department: doctor.department().map(str::to_string),
            phone_number: doctor.phone_number().map(|p| p.value().to_string()),
            email: doctor.email().map(|e| e.value().to_string()),
            specialties: doctor.specialties().to_vec(),
            created_at: to_bson_datetime(doctor.created_at()),
            updated_at: to_bson_datetime(doctor.updated_at()),
        }
    }
}

impl DoctorDocument {
    pub fn into_doctor(self) -> AppResult<Doctor> {
        let bad = |e| corrupted("doctor", &self.id, e);

        let props = DoctorProps {
            id: Some(DoctorId::from_string(&self.id).map_err(bad)?),
            name: self.name.clone(),
            hospital_name: self.hospital_name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            phone_number: self
                .phone_number
                .as_deref()
                .map(PhoneNumber::create)
                .transpose()
                .map_err(bad)?,
            email: self.email.as_deref().map(Email::create).transpose().map_err(bad)?,
            specialties: self.specialties.clone(),
            created_at: Some(to_chrono(self.created_at)?),
            updated_at: Some(to_chrono(self.updated_at)?),
        };

        Doctor::create(props).map_err(bad)
    }
}

/// `reviews` 컬렉션 문서
///
/// 평점 범위 검색을 DB에서 처리하도록 다섯 항목 평균(`average_rating`)을 함께 저장합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub target_type: String,
    pub target_id: String,
    pub author_id: String,
    pub ratings: ReviewRatings,
    pub average_rating: f64,
    pub overall_rating: Option<Rating>,
    pub work_year: Option<i32>,
    pub work_duration: Option<String>,
    pub title: String,
    pub content: String,
    pub is_anonymous: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<&Review> for ReviewDocument {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id().value().to_string(),
            target_type: review.target().target_type().as_str().to_string(),
            target_id: review.target().id().to_string(),
            author_id: review.author_id().value().to_string(),
            ratings: *review.ratings(),
            average_rating: review.average_rating(),
            overall_rating: review.overall_rating(),
            work_year: review.work_year(),
            work_duration: review.work_duration().map(str::to_string),
            title: review.title().to_string(),
            content: review.content().to_string(),
            is_anonymous: review.is_anonymous(),
            created_at: to_bson_datetime(review.created_at()),
            updated_at: to_bson_datetime(review.updated_at()),
        }
    }
}

impl ReviewDocument {
    pub fn into_review(self) -> AppResult<Review> {
        let bad = |e| corrupted("review", &self.id, e);

        let target_type = TargetType::from_string(&self.target_type).ok_or_else(|| {
            AppError::PersistenceError(format!(
                "unknown target type {} on review {}",
                self.target_type, self.id
            ))
        })?;

        let props = ReviewProps {
            id: Some(ReviewId::from_string(&self.id).map_err(bad)?),
            target: ReviewTarget::parse(target_type, &self.target_id).map_err(bad)?,
            author_id: UserId::from_string(&self.author_id).map_err(bad)?,
            ratings: self.ratings,
            overall_rating: self.overall_rating,
            work_year: self.work_year,
            work_duration: self.work_duration.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            is_anonymous: self.is_anonymous,
            created_at: Some(to_chrono(self.created_at)?),
            updated_at: Some(to_chrono(self.updated_at)?),
        };

        Review::create(props).map_err(bad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::reviews::review::tests::ratings;

    #[test]
    fn test_user_document_round_trip_keeps_credential() {
        let mut props = UserProps::new_staff(
            Email::create("doc@hospital.kr").unwrap(),
            "$2b$04$hash".to_string(),
            "문서",
            "병원",
        );
        props.credential = Some(VerificationCredential::BusinessNumber(
            BusinessNumber::create("123-45-67891").unwrap(),
        ));
        let user = User::create(props).unwrap();

        let document = UserDocument::from(&user);
        assert!(document.medical_license_number.is_none());
        assert_eq!(document.business_number.as_deref(), Some("1234567891"));

        let restored = document.into_user().unwrap();
        assert_eq!(restored.id(), user.id());
        assert_eq!(restored.credential(), user.credential());
        assert_eq!(
            restored.created_at().timestamp_millis(),
            user.created_at().timestamp_millis()
        );
    }

    #[test]
    fn test_corrupted_document_is_persistence_error() {
        let props = UserProps::new_staff(
            Email::create("doc@hospital.kr").unwrap(),
            "$2b$04$hash".to_string(),
            "문서",
            "병원",
        );
        let mut document = UserDocument::from(&User::create(props).unwrap());
        document.role = "SUPERUSER".to_string();

        assert!(matches!(document.into_user(), Err(AppError::PersistenceError(_))));
    }

    #[test]
    fn test_review_document_stores_average() {
        let review = Review::create(ReviewProps {
            id: None,
            target: ReviewTarget::Doctor(DoctorId::generate()),
            author_id: UserId::generate(),
            ratings: ratings([5, 4, 5, 4, 5]),
            overall_rating: None,
            work_year: Some(2023),
            work_duration: None,
            title: "문서 변환 테스트".to_string(),
            content: "문서로 바꿨다가 다시 엔티티로 되돌려도 같아야 합니다.".to_string(),
            is_anonymous: true,
            created_at: None,
            updated_at: None,
        })
        .unwrap();

        let document = ReviewDocument::from(&review);
        assert_eq!(document.target_type, "doctor");
        assert!((document.average_rating - 4.6).abs() < f64::EPSILON);

        let restored = document.into_review().unwrap();
        assert_eq!(restored.id(), review.id());
        assert_eq!(restored.target(), review.target());
        assert!(restored.is_anonymous());
    }
}
