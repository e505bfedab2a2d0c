//! Doctor Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::coordinators::coordinator::required;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{DoctorId, Email, PhoneNumber};

#[derive(Debug, Clone)]
pub struct DoctorProps {
    pub id: Option<DoctorId>,
    pub name: String,
    pub hospital_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<PhoneNumber>,
    pub email: Option<Email>,
    /// 전문 분야
    pub specialties: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl DoctorProps {
    pub fn new(name: impl Into<String>, hospital_name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            hospital_name: hospital_name.into(),
            position: None,
            department: None,
            phone_number: None,
            email: None,
            specialties: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// `Doctor::update_profile` 부분 변경 요청. `None`인 필드는 그대로 둡니다.
#[derive(Debug, Clone, Default)]
pub struct DoctorProfileUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub specialties: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    hospital_name: String,
    position: Option<String>,
    department: Option<String>,
    phone_number: Option<PhoneNumber>,
    email: Option<Email>,
    specialties: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Doctor {
    pub fn create(props: DoctorProps) -> DomainResult<Self> {
        let name = required(&props.name, "name")?;
        let hospital_name = required(&props.hospital_name, "hospital name")?;
        let created_at = props.created_at.unwrap_or_else(Utc::now);

        Ok(Self {
            id: props.id.unwrap_or_else(DoctorId::generate),
            name,
            hospital_name,
            position: props.position,
            department: props.department,
            phone_number: props.phone_number,
            email: props.email,
            specialties: normalize_specialties(props.specialties),
            created_at,
            updated_at: props.updated_at.unwrap_or(created_at),
        })
    }

    pub fn id(&self) -> &DoctorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hospital_name(&self) -> &str {
        &self.hospital_name
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_number.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_profile(&mut self, update: DoctorProfileUpdate) -> DomainResult<()> {
        let name = update.name.as_deref().map(|n| required(n, "name")).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(position) = update.position {
            self.position = Some(position);
        }
        if let Some(department) = update.department {
            self.department = Some(department);
        }
        if let Some(specialties) = update.specialties {
            self.specialties = normalize_specialties(specialties);
        }
        self.touch();
        Ok(())
    }

    pub fn update_contact_info(&mut self, email: Option<Email>, phone_number: Option<PhoneNumber>) {
        if let Some(email) = email {
            self.email = Some(email);
        }
        if let Some(phone_number) = phone_number {
            self.phone_number = Some(phone_number);
        }
        self.touch();
    }

    pub fn update_position(&mut self, position: impl Into<String>, department: Option<String>) {
        self.position = Some(position.into());
        if let Some(department) = department {
            self.department = Some(department);
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    pub fn to_snapshot(&self) -> DoctorSnapshot {
        DoctorSnapshot {
            id: self.id.value().to_string(),
            name: self.name.clone(),
            hospital_name: self.hospital_name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            phone_number: self.phone_number.as_ref().map(|p| p.value().to_string()),
            email: self.email.as_ref().map(|e| e.value().to_string()),
            specialties: self.specialties.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 공백 제거, 빈 항목 및 중복 제거 (입력 순서 유지)
fn normalize_specialties(specialties: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(specialties.len());
    for specialty in specialties {
        let trimmed = specialty.trim();
        if !trimmed.is_empty() && !normalized.iter().any(|s| s == trimmed) {
            normalized.push(trimmed.to_string());
        }
    }
    normalized
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSnapshot {
    pub id: String,
    pub name: String,
    pub hospital_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub specialties: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
