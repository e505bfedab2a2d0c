//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 비밀번호 해시는 공개 스냅샷에 포함되지 않으며, 인증 코드만
//! [`User::password_hash`]로 접근합니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    BusinessNumber, Email, MedicalLicenseNumber, UserId, VerificationCredential,
};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    HospitalStaff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::HospitalStaff => "HOSPITAL_STAFF",
        }
    }

    pub fn from_string(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(UserRole::Admin),
            "HOSPITAL_STAFF" => Some(UserRole::HospitalStaff),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 가입 인증 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "PENDING",
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_string(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(VerificationStatus::Pending),
            "VERIFIED" => Some(VerificationStatus::Verified),
            "REJECTED" => Some(VerificationStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `User::create` 입력값
///
/// `id`와 타임스탬프가 비어 있으면 새로 생성합니다. 저장소에서 복원할 때는 모두 채워서 넘깁니다.
#[derive(Debug, Clone)]
pub struct UserProps {
    pub id: Option<UserId>,
    pub email: Email,
    pub password_hash: String,
    pub name: String,
    pub hospital_name: String,
    pub role: UserRole,
    pub verification_status: VerificationStatus,
    pub credential: Option<VerificationCredential>,
    pub verification_documents: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProps {
    /// `PENDING` 상태의 병원 직원 가입 입력
    pub fn new_staff(
        email: Email,
        password_hash: String,
        name: impl Into<String>,
        hospital_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            email,
            password_hash,
            name: name.into(),
            hospital_name: hospital_name.into(),
            role: UserRole::HospitalStaff,
            verification_status: VerificationStatus::Pending,
            credential: None,
            verification_documents: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: String,
    name: String,
    hospital_name: String,
    role: UserRole,
    verification_status: VerificationStatus,
    credential: Option<VerificationCredential>,
    verification_documents: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub fn create(props: UserProps) -> DomainResult<Self> {
        if props.name.trim().is_empty() {
            return Err(DomainError::EmptyValue { field: "name" });
        }
        if props.hospital_name.trim().is_empty() {
            return Err(DomainError::EmptyValue {
                field: "hospital name",
            });
        }
        if props.password_hash.is_empty() {
            return Err(DomainError::EmptyValue {
                field: "password hash",
            });
        }

        let now = Utc::now();
        let created_at = props.created_at.unwrap_or(now);

        Ok(Self {
            id: props.id.unwrap_or_else(UserId::generate),
            email: props.email,
            password_hash: props.password_hash,
            name: props.name.trim().to_string(),
            hospital_name: props.hospital_name.trim().to_string(),
            role: props.role,
            verification_status: props.verification_status,
            credential: props.credential,
            verification_documents: props.verification_documents,
            created_at,
            updated_at: props.updated_at.unwrap_or(created_at),
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hospital_name(&self) -> &str {
        &self.hospital_name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn verification_status(&self) -> VerificationStatus {
        self.verification_status
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }

    pub fn credential(&self) -> Option<&VerificationCredential> {
        self.credential.as_ref()
    }

    pub fn medical_license_number(&self) -> Option<&MedicalLicenseNumber> {
        match &self.credential {
            Some(VerificationCredential::MedicalLicense(license)) => Some(license),
            _ => None,
        }
    }

    pub fn business_number(&self) -> Option<&BusinessNumber> {
        match &self.credential {
            Some(VerificationCredential::BusinessNumber(number)) => Some(number),
            _ => None,
        }
    }

    pub fn verification_documents(&self) -> &[String] {
        &self.verification_documents
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 저장된 bcrypt 해시. 로그인 검증에서만 사용합니다.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// `PENDING` → `VERIFIED`
    ///
    /// `VERIFIED`와 `REJECTED`는 종결 상태이므로 그 밖의 상태에서는 실패합니다.
    pub fn verify(&mut self) -> DomainResult<()> {
        self.ensure_pending("verify")?;
        self.verification_status = VerificationStatus::Verified;
        self.touch();
        Ok(())
    }

    /// `PENDING` → `REJECTED`
    pub fn reject(&mut self) -> DomainResult<()> {
        self.ensure_pending("reject")?;
        self.verification_status = VerificationStatus::Rejected;
        self.touch();
        Ok(())
    }

    fn ensure_pending(&self, action: &str) -> DomainResult<()> {
        match self.verification_status {
            VerificationStatus::Pending => Ok(()),
            status => Err(DomainError::InvalidStateTransition(format!(
                "cannot {} user with status {}",
                action, status
            ))),
        }
    }

    pub fn update_password(&mut self, new_password_hash: String) -> DomainResult<()> {
        if new_password_hash.is_empty() {
            return Err(DomainError::EmptyValue {
                field: "password hash",
            });
        }
        self.password_hash = new_password_hash;
        self.touch();
        Ok(())
    }

    pub fn can_write_review(&self) -> bool {
        self.is_verified()
    }

    /// 인증 여부만 확인합니다. 작성 이력 조건은 `ReviewAccessService`가 판단합니다.
    pub fn can_view_reviews(&self) -> bool {
        self.is_verified()
    }

    fn touch(&mut self) {
        let now = Utc::now();
        // 시계가 뒤로 가더라도 updated_at 은 감소하지 않음
        self.updated_at = now.max(self.updated_at);
    }

    /// 공개 직렬화 뷰 (비밀번호 해시 제외)
    pub fn to_snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id.value().to_string(),
            email: self.email.value().to_string(),
            name: self.name.clone(),
            hospital_name: self.hospital_name.clone(),
            role: self.role,
            verification_status: self.verification_status,
            is_verified: self.is_verified(),
            medical_license_number: self.medical_license_number().map(|l| l.value().to_string()),
            business_number: self.business_number().map(|b| b.value().to_string()),
            verification_documents: self.verification_documents.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 사용자 공개 스냅샷
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub id: String,
    pub email: String,
    pub name: String,
    pub hospital_name: String,
    pub role: UserRole,
    pub verification_status: VerificationStatus,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,
    pub verification_documents: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
